use std::str::FromStr;

/// Premultiplied sRGB color with `f32` channels in `[0, 1]`.
///
/// Invariant:
/// - `rgb` components are already multiplied by `a`.
///
/// Colors enter the engine from configuration strings (`#rrggbb`, `#rgb`,
/// `#rrggbbaa` or a CSS 2.1 color keyword) and leave it as SVG paint
/// attributes, so the straight-alpha view is recovered on output.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha sRGB bytes.
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    /// `#rrggbb` without alpha. Pair with [`opacity`](Self::opacity) for SVG output.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_srgb_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    #[inline]
    pub fn opacity(self) -> f32 {
        self.a
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Rec. 709 relative luminance of the straight color, gamma-encoded channels.
    pub fn luminance(self) -> f32 {
        let (r, g, b, _) = self.to_straight();
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// True for backgrounds that need light foreground content.
    ///
    /// Fully transparent colors count as light: they composite over the
    /// host page, which is white unless the host says otherwise.
    #[inline]
    pub fn is_dark(self) -> bool {
        !self.is_transparent() && self.luminance() < 0.5
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa` or a CSS 2.1 color keyword.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::new(input));
        }
        named(&s.to_ascii_lowercase()).ok_or_else(|| ColorParseError::new(input))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
    match hex.len() {
        3 => Some(Color::from_srgb_u8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        6 => Some(Color::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Color::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn named(name: &str) -> Option<Color> {
    let rgb = match name {
        "transparent" => return Some(Color::transparent()),
        "black" => (0, 0, 0),
        "silver" => (192, 192, 192),
        "gray" | "grey" => (128, 128, 128),
        "white" => (255, 255, 255),
        "maroon" => (128, 0, 0),
        "red" => (255, 0, 0),
        "purple" => (128, 0, 128),
        "fuchsia" => (255, 0, 255),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "olive" => (128, 128, 0),
        "yellow" => (255, 255, 0),
        "navy" => (0, 0, 128),
        "blue" => (0, 0, 255),
        "teal" => (0, 128, 128),
        "aqua" => (0, 255, 255),
        "orange" => (255, 165, 0),
        _ => return None,
    };
    Some(Color::from_srgb_u8(rgb.0, rgb.1, rgb.2, 255))
}

/// Raised when a configuration string is not a recognizable color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized color `{input}` (expected #rgb, #rrggbb, #rrggbbaa or a CSS 2.1 color keyword)")]
pub struct ColorParseError {
    pub input: String,
}

impl ColorParseError {
    fn new(input: &str) -> Self {
        Self { input: input.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_hex() {
        let c = Color::parse("#6a176e").unwrap();
        assert_eq!(c.to_srgb_u8(), [0x6a, 0x17, 0x6e, 255]);
        assert_eq!(c.to_hex(), "#6a176e");
    }

    #[test]
    fn short_hex_expands_nibbles() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#000").unwrap(), Color::BLACK);
    }

    #[test]
    fn eight_digit_hex_is_premultiplied() {
        let c = Color::parse("#ff000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
        assert!((c.r - c.a).abs() < 1e-6);
        assert_eq!(c.to_srgb_u8(), [255, 0, 0, 128]);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Color::parse(" Black ").unwrap(), Color::BLACK);
        assert!(Color::parse("transparent").unwrap().is_transparent());
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::parse("#xyz").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("chartreuse-ish").is_err());
        let err = Color::parse("nope").unwrap_err();
        assert_eq!(err.input, "nope");
    }

    #[test]
    fn every_css21_keyword_parses() {
        let keywords = [
            ("black", "#000000"),
            ("silver", "#c0c0c0"),
            ("gray", "#808080"),
            ("grey", "#808080"),
            ("white", "#ffffff"),
            ("maroon", "#800000"),
            ("red", "#ff0000"),
            ("purple", "#800080"),
            ("fuchsia", "#ff00ff"),
            ("green", "#008000"),
            ("lime", "#00ff00"),
            ("olive", "#808000"),
            ("yellow", "#ffff00"),
            ("navy", "#000080"),
            ("blue", "#0000ff"),
            ("teal", "#008080"),
            ("aqua", "#00ffff"),
            ("orange", "#ffa500"),
        ];
        for (name, hex) in keywords {
            let color = Color::parse(name).unwrap_or_else(|e| panic!("{e}"));
            assert_eq!(color.to_hex(), hex, "{name}");
        }
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = Color::parse("rebeccapurple").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("`rebeccapurple`"));
        assert!(msg.contains("CSS 2.1 color keyword"));
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn darkness_follows_luminance() {
        assert!(Color::BLACK.is_dark());
        assert!(!Color::WHITE.is_dark());
        assert!(!Color::parse("#fafafa").unwrap().is_dark());
        assert!(Color::parse("#16534c").unwrap().is_dark());
    }
}
