use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Solid rectangle; frames use it to clear the canvas and caption strip.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl DrawList {
    #[inline]
    pub fn push_solid_rect(&mut self, layer: Layer, rect: Rect, color: Color) {
        self.push(layer, DrawCmd::Rect(RectCmd { rect, color }));
    }
}
