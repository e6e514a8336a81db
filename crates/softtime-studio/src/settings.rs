use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use softtime_clock::ClockSpec;

use crate::cli::StyleArgs;

/// Reads a `ClockSpec` from TOML, or the defaults when no file was given.
pub fn load_spec(path: Option<&Path>) -> Result<ClockSpec> {
    let Some(path) = path else {
        return Ok(ClockSpec::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let spec = toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    log::debug!("loaded clock settings from {}", path.display());
    Ok(spec)
}

/// Layers command-line flags over `spec`.
///
/// A theme sets background and palette family first; explicit
/// `--palette`, `--colors` and `--background` then win over it.
pub fn apply_args(mut spec: ClockSpec, args: &StyleArgs) -> Result<ClockSpec> {
    if let Some(theme) = args.theme {
        spec.background = theme.background().to_string();
        spec.colors = theme.palette_at(0).colors();
    }
    if let Some(name) = &args.palette {
        let theme = args.theme.unwrap_or_default();
        spec.colors = theme.palette(name)?.colors();
    }
    if let Some(colors) = &args.colors {
        spec.colors = colors.iter().map(|c| c.trim().to_string()).collect();
    }
    if let Some(bg) = &args.background {
        spec.background = bg.clone();
    }
    if let Some(size) = args.size {
        spec.size = size;
    }
    if let Some(seed) = args.seed {
        spec.seed = seed;
    }
    if let Some(scheme) = &args.scheme {
        spec.scheme = scheme.clone();
    }
    if let Some(blur) = args.blur {
        spec.blur = blur;
    }
    if let Some(zone) = &args.zone {
        spec.time_zone = zone.clone();
    }
    if let Some(label) = &args.label {
        spec.zone_label = Some(label.clone());
    }
    if let Some(n) = args.circles {
        spec.circle_count = n;
    }
    if let Some(scale) = args.radius_scale {
        spec.radius_scale = scale;
    }
    if args.no_time {
        spec.show_time = false;
    }
    Ok(spec)
}
