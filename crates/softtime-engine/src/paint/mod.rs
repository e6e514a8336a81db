//! Paint model shared between the clock core and the render backends.
//!
//! Scope:
//! - color representation (premultiplied sRGB)
//! - paint sources (solid, two-circle radial gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::{Color, ColorParseError};
pub use gradient::{ColorStop, GradientAnchor, RadialGradient};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    RadialGradient(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn is_gradient(&self) -> bool {
        matches!(self, Paint::RadialGradient(_))
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self {
        Paint::RadialGradient(g)
    }
}
