use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, Layer};

use super::Border;

/// A filled and/or stroked circle.
///
/// Stroke-only circles (the outline scheme) carry `fill: None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Option<Paint>,
    pub stroke: Option<Border>,
}

impl CircleCmd {
    #[inline]
    pub fn is_outline(&self) -> bool {
        self.fill.is_none() && self.stroke.is_some()
    }

    #[inline]
    pub fn has_gradient(&self) -> bool {
        self.fill.as_ref().is_some_and(Paint::is_gradient)
    }
}

impl DrawList {
    pub fn push_circle(&mut self, layer: Layer, center: Vec2, radius: f32, fill: Paint) {
        let cmd = CircleCmd { center, radius, fill: Some(fill), stroke: None };
        self.push(layer, DrawCmd::Circle(cmd));
    }

    pub fn push_circle_outline(&mut self, layer: Layer, center: Vec2, radius: f32, stroke: Border) {
        let cmd = CircleCmd { center, radius, fill: None, stroke: Some(stroke) };
        self.push(layer, DrawCmd::Circle(cmd));
    }
}
