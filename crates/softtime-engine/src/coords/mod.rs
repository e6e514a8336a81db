//! Coordinate and geometry types shared by the scene and its backends.
//!
//! Canonical space:
//! - logical pixels
//! - origin top-left
//! - +X right, +Y down (so angle `-π/2` points up)

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
