mod circle;
mod rect;
mod text;

pub use circle::CircleCmd;
pub use rect::RectCmd;
pub use text::{TextAnchor, TextCmd};

use crate::paint::Color;

/// Stroke centered on a shape's outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
