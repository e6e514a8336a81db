use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// One end of a two-circle radial gradient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientAnchor {
    pub center: Vec2,
    pub radius: f32,
}

impl GradientAnchor {
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Two-circle radial gradient in logical pixel space.
///
/// Semantics follow the canvas `createRadialGradient(inner, outer)` model:
/// - `t = 0` lies on the `inner` circle, `t = 1` on the `outer` circle
/// - the inner circle may be off-center (it becomes the SVG focal circle)
/// - outside that range the end stops are padded
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub inner: GradientAnchor,
    pub outer: GradientAnchor,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(inner: GradientAnchor, outer: GradientAnchor, stops: Vec<ColorStop>) -> Self {
        Self { inner, outer, stops }
    }

    /// Convenience for the common two-stop case.
    pub fn two_stop(inner: GradientAnchor, outer: GradientAnchor, from: Color, to: Color) -> Self {
        Self::new(inner, outer, vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)])
    }

    /// Color at `t`, or `None` when no stop sits exactly there.
    pub fn stop_at(&self, t: f32) -> Option<Color> {
        self.stops.iter().find(|s| s.t == t).map(|s| s.color)
    }

    /// Color of the first stop; fills everything inside the inner circle.
    pub fn inner_color(&self) -> Color {
        self.stops.first().map(|s| s.color).unwrap_or_default()
    }

    /// Stops re-expressed for a gradient whose inner circle is shrunk to a
    /// point at the same focus.
    ///
    /// Exact for concentric circles. For an off-center focus the inner edge
    /// is placed at `inner.radius / outer.radius` in every direction.
    pub fn stops_from_focal_point(&self) -> Vec<ColorStop> {
        let k = if self.outer.radius > 0.0 { (self.inner.radius / self.outer.radius).clamp(0.0, 1.0) } else { 0.0 };
        self.stops.iter().map(|s| ColorStop::new(k + s.t * (1.0 - k), s.color)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(x: f32, y: f32, r: f32) -> GradientAnchor {
        GradientAnchor::new(Vec2::new(x, y), r)
    }

    #[test]
    fn two_stop_places_colors_at_ends() {
        let g = RadialGradient::two_stop(anchor(1.0, 1.0, 2.0), anchor(0.0, 0.0, 10.0), Color::WHITE, Color::BLACK);
        assert_eq!(g.stop_at(0.0), Some(Color::WHITE));
        assert_eq!(g.stop_at(1.0), Some(Color::BLACK));
        assert_eq!(g.stop_at(0.5), None);
        assert_eq!(g.inner_color(), Color::WHITE);
    }

    #[test]
    fn focal_point_stops_start_at_the_inner_edge() {
        let g = RadialGradient::two_stop(anchor(0.0, 0.0, 10.0), anchor(0.0, 0.0, 40.0), Color::WHITE, Color::BLACK);
        let ts: Vec<f32> = g.stops_from_focal_point().iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.25, 1.0]);
    }

    #[test]
    fn point_inner_circle_keeps_stops() {
        let g = RadialGradient::two_stop(anchor(3.0, 4.0, 0.0), anchor(0.0, 0.0, 40.0), Color::WHITE, Color::BLACK);
        assert_eq!(g.stops_from_focal_point(), g.stops);
    }
}
