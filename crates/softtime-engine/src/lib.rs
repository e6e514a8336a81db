//! Soft-time engine crate.
//!
//! Owns the drawing stack shared by the clock core and the studio host:
//! geometry, paint, the recorded scene, backends that turn a scene into
//! SVG or pixels, and the frame clock / periodic ticker.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod surface;
pub mod time;
