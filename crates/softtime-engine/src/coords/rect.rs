use super::Vec2;

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    /// Full-width band of `height` directly under `self`.
    #[inline]
    pub fn strip_below(self, height: f32) -> Rect {
        Rect::new(self.origin.x, self.bottom(), self.size.x, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_sits_under_the_canvas() {
        let canvas = Rect::new(0.0, 0.0, 300.0, 300.0);
        assert_eq!(canvas.strip_below(34.0), Rect::new(0.0, 300.0, 300.0, 34.0));
    }
}
