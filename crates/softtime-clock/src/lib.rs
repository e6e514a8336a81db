//! Soft-time clock core.
//!
//! A clock face is a chain of nested circles. The chain's link lengths and
//! radii come from a seeded generator and never change; the direction of
//! each link follows one clock hand (hour, minute, second, millisecond), so
//! the face slowly unfolds and refolds over the day.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`chain`] | `Circle`, `generate_chain` |
//! | [`reading`] | `ClockReading`, `ClockAngles` |
//! | [`layout`] | `Position`, `walk_chain` |
//! | [`frame`] | `paint_frame` onto any `DrawSurface` |
//! | [`session`] | `RenderSession`, one face with its own chain and style |
//! | [`config`] | `ClockSpec`, the serializable configuration |
//!
//! ```no_run
//! use softtime_clock::{ClockSpec, RenderSession};
//! use softtime_engine::scene::DrawList;
//!
//! let mut session = RenderSession::new(&ClockSpec::default()).unwrap();
//! let mut list = DrawList::new(session.viewport());
//! session.render_now(&mut list);
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod frame;
pub mod layout;
pub mod lcg;
pub mod palette;
pub mod reading;
pub mod session;
pub mod style;
pub mod time_source;

pub use chain::{Circle, generate_chain};
pub use config::ClockSpec;
pub use error::{ClockError, ConfigError, TimeSourceError};
pub use palette::{Theme, ZONE_PRESETS, ZonePreset};
pub use reading::{ClockAngles, ClockReading};
pub use session::{FrameReport, RenderSession, SessionSummary};
pub use style::{FillScheme, StyleConfig};
pub use time_source::{FixedTimeSource, TimeSource, ZonedTimeSource};
