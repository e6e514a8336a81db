//! Render backends.
//!
//! Backends consume `scene` draw streams; nothing here knows about clocks.
//!
//! Convention:
//! - scene geometry is in logical pixels (top-left origin, +Y down)
//! - one logical pixel maps to one output pixel

pub mod raster;
pub mod svg;

pub use raster::{Rasterizer, write_gif, write_png};
pub use svg::SvgRenderer;
