//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - remember the filter state each command was recorded under
//! - provide deterministic ordering (z-index + insertion order)

mod cmd;
mod layer;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use layer::{Layer, SortKey};
pub use list::{DrawItem, DrawList};
pub use shapes::{Border, CircleCmd, RectCmd, TextAnchor, TextCmd};
