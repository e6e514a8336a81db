use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Horizontal alignment of a text run relative to its origin.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

/// Text draw payload.
///
/// Text is host decoration (labels under a face); backends draw it with a
/// monospace family.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub bold: bool,
    /// Baseline point in logical pixels.
    pub origin: Vec2,
    pub anchor: TextAnchor,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, layer: Layer, cmd: TextCmd) {
        self.push(layer, DrawCmd::Text(cmd));
    }
}
