//! Built-in palettes, themes and zone presets.
//!
//! Palettes are plain data: five colors each, ordered hub-first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A named five-color palette, hub color first.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: [&'static str; 5],
}

impl Palette {
    pub fn colors(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_string()).collect()
    }
}

const fn p(name: &'static str, colors: [&'static str; 5]) -> Palette {
    Palette { name, colors }
}

pub const DARK_PALETTES: [Palette; 6] = [
    p("ylorrd", ["#800026", "#e11e20", "#fd893c", "#fed676", "#ffffcc"]),
    p("inferno", ["#6a176e", "#b1325a", "#ea632a", "#fcb216", "#fcffa4"]),
    p("viridis", ["#482475", "#31668e", "#1e9c89", "#6ccd5a", "#fde725"]),
    p("cubehelix", ["#16534c", "#4b7830", "#b07958", "#d48ec3", "#c1caf3"]),
    p("plasma", ["#41049d", "#99159f", "#d6556d", "#fa9e3b", "#f0f921"]),
    p("rurd", ["#b70b4f", "#e33890", "#d08ac2", "#dcc9e2", "#f7f4f9"]),
];

pub const LIGHT_PALETTES: [Palette; 6] = [
    p("orrd", ["#fdcc8a", "#fc8d59", "#e34a33", "#b30000", "#7f0000"]),
    p("viridis", ["#fde725", "#5ec962", "#21918c", "#3b528b", "#440154"]),
    p("ylgn", ["#d9f0a3", "#addd8e", "#41ab5d", "#006837", "#004529"]),
    p("ylgnbu", ["#edf8b1", "#7fcdbb", "#41b6c4", "#225ea8", "#081d58"]),
    p("pubugn", ["#d0d1e6", "#67a9cf", "#1c9099", "#016c59", "#014636"]),
    p("rdpu", ["#fcc5c0", "#f768a1", "#dd3497", "#7a0177", "#49006a"]),
];

/// Page theme: picks the background and the palette family.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn background(self) -> &'static str {
        match self {
            Theme::Dark => "black",
            Theme::Light => "#fafafa",
        }
    }

    pub fn palettes(self) -> &'static [Palette; 6] {
        match self {
            Theme::Dark => &DARK_PALETTES,
            Theme::Light => &LIGHT_PALETTES,
        }
    }

    /// The `i`-th palette, wrapping around the family.
    pub fn palette_at(self, i: usize) -> &'static Palette {
        let family = self.palettes();
        &family[i % family.len()]
    }

    pub fn palette(self, name: &str) -> Result<&'static Palette, ConfigError> {
        self.palettes()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownPalette(name.to_string()))
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme `{other}` (expected dark or light)")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        })
    }
}

/// A time zone shown on the multi-face page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZonePreset {
    pub zone: &'static str,
    pub label: &'static str,
}

pub const ZONE_PRESETS: [ZonePreset; 6] = [
    ZonePreset { zone: "UTC", label: "UTC" },
    ZonePreset { zone: "GMT", label: "GMT" },
    ZonePreset { zone: "America/New_York", label: "EST" },
    ZonePreset { zone: "America/Los_Angeles", label: "PST" },
    ZonePreset { zone: "Europe/Paris", label: "CET" },
    ZonePreset { zone: "Asia/Shanghai", label: "CST" },
];

/// Per-palette seed used by the watch face: `100 + index * 23.7`.
pub fn watch_seed(palette_index: usize) -> f64 {
    100.0 + palette_index.min(DARK_PALETTES.len() - 1) as f64 * 23.7
}

#[cfg(test)]
mod tests {
    use super::*;
    use softtime_engine::paint::Color;

    #[test]
    fn every_builtin_color_parses() {
        for palette in DARK_PALETTES.iter().chain(LIGHT_PALETTES.iter()) {
            for c in palette.colors {
                assert!(Color::parse(c).is_ok(), "{}: {c}", palette.name);
            }
        }
    }

    #[test]
    fn palette_lookup_is_case_insensitive() {
        assert_eq!(Theme::Dark.palette("Inferno").unwrap().colors[0], "#6a176e");
        assert!(matches!(Theme::Light.palette("inferno"), Err(ConfigError::UnknownPalette(_))));
    }

    #[test]
    fn palette_at_wraps() {
        assert_eq!(Theme::Light.palette_at(6), &LIGHT_PALETTES[0]);
    }

    #[test]
    fn watch_seeds_are_spaced_and_clamped() {
        assert_eq!(watch_seed(0), 100.0);
        assert!((watch_seed(2) - 147.4).abs() < 1e-9);
        assert_eq!(watch_seed(40), watch_seed(5));
    }

    #[test]
    fn theme_backgrounds_match_darkness() {
        assert!(Color::parse(Theme::Dark.background()).unwrap().is_dark());
        assert!(!Color::parse(Theme::Light.background()).unwrap().is_dark());
    }
}
