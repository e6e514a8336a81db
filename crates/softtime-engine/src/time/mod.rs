//! Time subsystem.
//!
//! - `FrameClock`: per-loop frame index and wall time
//! - `Ticker`: periodic tick source on the tokio runtime, released through
//!   its `TickHandle`

mod frame_clock;
mod ticker;

pub use frame_clock::{FrameClock, FrameTime};
pub use ticker::{DEFAULT_PERIOD, TickControl, TickHandle, Ticker};
