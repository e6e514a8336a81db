use crate::scene::shapes::{CircleCmd, RectCmd, TextCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::svg` to emit it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}

impl DrawCmd {
    #[inline]
    pub fn as_circle(&self) -> Option<&CircleCmd> {
        match self {
            DrawCmd::Circle(c) => Some(c),
            _ => None,
        }
    }
}
