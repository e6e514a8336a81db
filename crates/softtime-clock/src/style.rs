//! Resolved styling for a render session.

use std::fmt;
use std::str::FromStr;

use softtime_engine::paint::Color;

use crate::error::ConfigError;

/// How chain circles are painted.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FillScheme {
    /// Blurred nested radial gradients.
    #[default]
    Gradient,
    /// Flat palette fills, no blur.
    Solid,
    /// Contrast-colored outlines only.
    Outline,
}

impl FillScheme {
    pub const ALL: [FillScheme; 3] = [FillScheme::Gradient, FillScheme::Solid, FillScheme::Outline];

    pub fn name(self) -> &'static str {
        match self {
            FillScheme::Gradient => "Gradient",
            FillScheme::Solid => "Solid",
            FillScheme::Outline => "Outline",
        }
    }
}

impl FromStr for FillScheme {
    type Err = ConfigError;

    /// Case-insensitive; `None` is accepted for `Outline` (the web control's label).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gradient" => Ok(FillScheme::Gradient),
            "solid" => Ok(FillScheme::Solid),
            "outline" | "none" => Ok(FillScheme::Outline),
            _ => Err(ConfigError::UnknownScheme(s.to_string())),
        }
    }
}

impl fmt::Display for FillScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated, parsed styling. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub colors: Vec<Color>,
    pub background: Color,
    /// Gaussian blur radius for the gradient pass, logical pixels.
    pub blur: f32,
    pub scheme: FillScheme,
}

/// Stroke width of outline circles.
pub const OUTLINE_WIDTH: f32 = 2.0;

impl StyleConfig {
    /// Outline stroke: light on dark backgrounds, dark on light ones.
    pub fn stroke_color(&self) -> Color {
        if self.background.is_dark() { Color::WHITE } else { Color::BLACK }
    }

    /// Primary overlay text color (zone label).
    pub fn text_color(&self) -> Color {
        if self.background.is_dark() {
            Color::WHITE
        } else {
            Color::from_srgb_u8(0x33, 0x33, 0x33, 255)
        }
    }

    /// Secondary overlay text color (time readout).
    pub fn secondary_text_color(&self) -> Color {
        if self.background.is_dark() {
            Color::from_srgb_u8(0xcc, 0xcc, 0xcc, 255)
        } else {
            Color::from_srgb_u8(0x66, 0x66, 0x66, 255)
        }
    }

    /// Palette color for chain index `i`.
    ///
    /// Sessions check the palette length up front, so an index past the end
    /// means the caller bypassed validation.
    pub fn color(&self, i: usize) -> Color {
        self.colors[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(background: Color) -> StyleConfig {
        StyleConfig { colors: vec![], background, blur: 2.0, scheme: FillScheme::Gradient }
    }

    #[test]
    fn scheme_names_parse_case_insensitively() {
        assert_eq!("gradient".parse::<FillScheme>().unwrap(), FillScheme::Gradient);
        assert_eq!("SOLID".parse::<FillScheme>().unwrap(), FillScheme::Solid);
        assert_eq!("Outline".parse::<FillScheme>().unwrap(), FillScheme::Outline);
        assert_eq!("None".parse::<FillScheme>().unwrap(), FillScheme::Outline);
    }

    #[test]
    fn unknown_scheme_is_a_config_error() {
        assert_eq!(
            "Sparkle".parse::<FillScheme>(),
            Err(ConfigError::UnknownScheme("Sparkle".into()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for s in FillScheme::ALL {
            assert_eq!(s.to_string().parse::<FillScheme>().unwrap(), s);
        }
    }

    #[test]
    fn stroke_contrasts_with_background() {
        assert_eq!(style(Color::BLACK).stroke_color(), Color::WHITE);
        assert_eq!(style(Color::WHITE).stroke_color(), Color::BLACK);
        assert_eq!(style(Color::parse("#fafafa").unwrap()).stroke_color(), Color::BLACK);
    }

    #[test]
    fn overlay_text_follows_background() {
        assert_eq!(style(Color::BLACK).text_color(), Color::WHITE);
        assert_eq!(style(Color::WHITE).secondary_text_color().to_hex(), "#666666");
    }
}
