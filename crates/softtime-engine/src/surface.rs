//! Drawing-surface contract consumed by clock renderers.
//!
//! A surface is a fixed-size 2D target that can clear itself, fill and
//! stroke circles, and apply a blur filter to the fills that follow.
//! [`DrawList`] is the recording implementation; backends in
//! [`crate::render`] turn a recorded list into SVG or pixels.

use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::{Color, Paint};
use crate::scene::{Border, DrawList, TextCmd};

pub trait DrawSurface {
    /// Surface size in logical pixels.
    fn viewport(&self) -> Viewport;

    /// Solid axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Filled circle; `paint` may be a solid color or a radial gradient.
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint);

    /// Circle outline without a fill.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, border: Border);

    /// Blurs every subsequent operation until [`clear_blur`](Self::clear_blur).
    fn set_blur(&mut self, radius: f32);

    fn clear_blur(&mut self);

    /// Host overlay text. Surfaces without text support may ignore it.
    fn draw_text(&mut self, text: TextCmd) {
        let _ = text;
    }
}

impl DrawSurface for DrawList {
    fn viewport(&self) -> Viewport {
        DrawList::viewport(self)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let layer = self.next_layer();
        self.push_solid_rect(layer, rect, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        let layer = self.next_layer();
        self.push_circle(layer, center, radius, paint);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, border: Border) {
        let layer = self.next_layer();
        self.push_circle_outline(layer, center, radius, border);
    }

    fn set_blur(&mut self, radius: f32) {
        DrawList::set_blur(self, radius);
    }

    fn clear_blur(&mut self) {
        DrawList::clear_blur(self);
    }

    fn draw_text(&mut self, text: TextCmd) {
        let layer = self.next_layer();
        self.push_text(layer, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    #[test]
    fn surface_calls_record_in_call_order() {
        let mut list = DrawList::new(Viewport::square(100.0));
        let surface: &mut dyn DrawSurface = &mut list;
        surface.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0), Color::BLACK);
        surface.fill_circle(Vec2::new(50.0, 50.0), 10.0, Color::WHITE.into());
        surface.stroke_circle(Vec2::new(50.0, 50.0), 5.0, Border::new(2.0, Color::WHITE));

        let kinds: Vec<_> = list
            .iter_in_paint_order()
            .map(|i| match &i.cmd {
                DrawCmd::Rect(_) => "rect",
                DrawCmd::Circle(c) if c.is_outline() => "stroke",
                DrawCmd::Circle(_) => "fill",
                DrawCmd::Text(_) => "text",
            })
            .collect();
        assert_eq!(kinds, vec!["rect", "fill", "stroke"]);
    }

    #[test]
    fn stroke_circle_has_no_fill() {
        let mut list = DrawList::new(Viewport::square(10.0));
        list.stroke_circle(Vec2::default(), 3.0, Border::new(1.0, Color::BLACK));
        let circle = list.items()[0].cmd.as_circle().unwrap();
        assert!(circle.fill.is_none());
        assert!(circle.is_outline());
    }
}
