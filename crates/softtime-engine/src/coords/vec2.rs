/// Point in surface space, logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Narrows double-precision layout coordinates into surface space.
    #[inline]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(x as f32, y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_keeps_pixel_precision() {
        let p = Vec2::from_f64(200.123_456_789, -0.5);
        assert!((p.x - 200.123_46).abs() < 1e-4);
        assert_eq!(p.y, -0.5);
    }
}
