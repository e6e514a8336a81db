//! User-facing clock configuration.
//!
//! `ClockSpec` is the unvalidated, serializable form (TOML files, CLI flags).
//! [`RenderSession::new`](crate::RenderSession::new) turns it into resolved
//! types and reports every problem before the first frame.

use serde::{Deserialize, Serialize};
use softtime_engine::paint::Color;

use crate::error::{ClockError, ConfigError};
use crate::palette::DARK_PALETTES;
use crate::reading::MAX_HANDS;
use crate::style::{FillScheme, StyleConfig};
use crate::time_source::ZonedTimeSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockSpec {
    /// Canvas side length in logical pixels.
    pub size: f64,
    pub seed: f64,
    pub circle_count: usize,
    /// Hub-first palette; needs at least `circle_count` entries.
    pub colors: Vec<String>,
    pub background: String,
    pub blur: f64,
    /// IANA zone name.
    pub time_zone: String,
    /// Overlay caption; defaults to the zone name.
    pub zone_label: Option<String>,
    /// Host overlay only; never changes the geometry.
    pub show_time: bool,
    pub scheme: String,
    /// Hub radius as a fraction of half the canvas.
    pub radius_scale: f64,
}

impl Default for ClockSpec {
    fn default() -> Self {
        Self {
            size: 400.0,
            seed: 100.0,
            circle_count: MAX_HANDS,
            colors: DARK_PALETTES[0].colors(),
            background: "white".to_string(),
            blur: 2.0,
            time_zone: "UTC".to_string(),
            zone_label: None,
            show_time: true,
            scheme: FillScheme::Gradient.name().to_string(),
            radius_scale: 0.8,
        }
    }
}

/// Everything a session needs, parsed and checked.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedSpec {
    pub size: f64,
    pub seed: f64,
    pub base_radius: f64,
    pub circle_count: usize,
    pub style: StyleConfig,
    pub source: ZonedTimeSource,
    pub label: String,
    pub show_time: bool,
}

impl ClockSpec {
    pub fn base_radius(&self) -> f64 {
        self.size / 2.0 * self.radius_scale
    }

    /// Validates configuration first, then the time zone.
    pub(crate) fn resolve(&self) -> Result<ResolvedSpec, ClockError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::InvalidSize(self.size).into());
        }
        let base_radius = self.base_radius();
        if !(base_radius.is_finite() && base_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(base_radius).into());
        }
        if !(1..=MAX_HANDS).contains(&self.circle_count) {
            return Err(ConfigError::CircleCount { got: self.circle_count, max: MAX_HANDS }.into());
        }
        if !self.seed.is_finite() {
            return Err(ConfigError::NonFiniteSeed(self.seed).into());
        }
        if !(self.blur.is_finite() && self.blur >= 0.0) {
            return Err(ConfigError::InvalidBlur(self.blur).into());
        }
        let scheme: FillScheme = self.scheme.parse()?;
        if self.colors.len() < self.circle_count {
            return Err(ConfigError::PaletteTooShort {
                needed: self.circle_count,
                got: self.colors.len(),
            }
            .into());
        }
        let colors = self
            .colors
            .iter()
            .map(|c| Color::parse(c))
            .collect::<Result<Vec<_>, _>>()
            .map_err(ConfigError::from)?;
        let background = Color::parse(&self.background).map_err(ConfigError::from)?;

        let source = ZonedTimeSource::from_name(&self.time_zone)?;

        Ok(ResolvedSpec {
            size: self.size,
            seed: self.seed,
            base_radius,
            circle_count: self.circle_count,
            style: StyleConfig { colors, background, blur: self.blur as f32, scheme },
            source,
            label: self.zone_label.clone().unwrap_or_else(|| self.time_zone.clone()),
            show_time: self.show_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimeSourceError;

    fn config_err(e: ConfigError) -> ClockError {
        ClockError::from(e)
    }

    fn err(spec: ClockSpec) -> ClockError {
        spec.resolve().unwrap_err()
    }

    #[test]
    fn defaults_resolve() {
        let r = ClockSpec::default().resolve().unwrap();
        assert_eq!(r.base_radius, 160.0);
        assert_eq!(r.circle_count, 5);
        assert_eq!(r.style.scheme, FillScheme::Gradient);
        assert_eq!(r.style.background, Color::WHITE);
        assert_eq!(r.label, "UTC");
    }

    #[test]
    fn rejects_non_positive_size() {
        assert_eq!(err(ClockSpec { size: 0.0, ..Default::default() }), config_err(ConfigError::InvalidSize(0.0)));
        assert!(matches!(err(ClockSpec { size: f64::NAN, ..Default::default() }), ClockError::Config(ConfigError::InvalidSize(_))));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let e = err(ClockSpec { radius_scale: -1.0, ..Default::default() });
        assert_eq!(e, config_err(ConfigError::NonPositiveRadius(-200.0)));
    }

    #[test]
    fn rejects_circle_counts_outside_the_dial() {
        for n in [0, 6] {
            let e = err(ClockSpec { circle_count: n, ..Default::default() });
            assert_eq!(e, config_err(ConfigError::CircleCount { got: n, max: 5 }));
        }
    }

    #[test]
    fn short_palette_fails_fast() {
        let spec = ClockSpec { colors: vec!["#000".into(), "#fff".into()], ..Default::default() };
        assert_eq!(err(spec), config_err(ConfigError::PaletteTooShort { needed: 5, got: 2 }));
    }

    #[test]
    fn short_palette_is_fine_for_short_chains() {
        let spec = ClockSpec { colors: vec!["#000".into(), "#fff".into()], circle_count: 2, ..Default::default() };
        assert!(spec.resolve().is_ok());
    }

    #[test]
    fn unknown_scheme_fails() {
        let e = err(ClockSpec { scheme: "Glitter".into(), ..Default::default() });
        assert_eq!(e, config_err(ConfigError::UnknownScheme("Glitter".into())));
    }

    #[test]
    fn bad_color_fails() {
        let e = err(ClockSpec { background: "#zzz".into(), ..Default::default() });
        assert!(matches!(e, ClockError::Config(ConfigError::Color(_))));
    }

    #[test]
    fn negative_blur_fails() {
        let e = err(ClockSpec { blur: -1.0, ..Default::default() });
        assert_eq!(e, config_err(ConfigError::InvalidBlur(-1.0)));
    }

    #[test]
    fn infinite_seed_fails() {
        let e = err(ClockSpec { seed: f64::INFINITY, ..Default::default() });
        assert!(matches!(e, ClockError::Config(ConfigError::NonFiniteSeed(_))));
    }

    #[test]
    fn unknown_zone_fails_without_fallback() {
        let e = err(ClockSpec { time_zone: "Atlantis/Capital".into(), ..Default::default() });
        assert_eq!(e, ClockError::from(TimeSourceError::UnknownZone("Atlantis/Capital".into())));
    }

    #[test]
    fn loads_from_toml_with_defaults() {
        let spec: ClockSpec = toml::from_str(
            r##"
                size = 300
                seed = 42.5
                scheme = "Solid"
                background = "#000000"
                time_zone = "Europe/Paris"
                zone_label = "CET"
            "##,
        )
        .unwrap();
        assert_eq!(spec.size, 300.0);
        assert_eq!(spec.circle_count, 5);
        assert_eq!(spec.blur, 2.0);
        let r = spec.resolve().unwrap();
        assert_eq!(r.style.scheme, FillScheme::Solid);
        assert_eq!(r.label, "CET");
    }

    #[test]
    fn unknown_toml_keys_are_rejected() {
        assert!(toml::from_str::<ClockSpec>("colour = \"red\"").is_err());
    }
}
