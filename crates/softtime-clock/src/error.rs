use thiserror::Error;

use softtime_engine::paint::ColorParseError;

/// Rejections raised while validating a clock configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("canvas size must be a positive finite number, got {0}")]
    InvalidSize(f64),

    #[error("base radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("circle count must be between 1 and {max}, got {got}")]
    CircleCount { got: usize, max: usize },

    #[error("palette has {got} colors but the chain has {needed} circles")]
    PaletteTooShort { needed: usize, got: usize },

    #[error("unknown fill scheme `{0}` (expected Gradient, Solid or Outline)")]
    UnknownScheme(String),

    #[error("blur radius must be a finite non-negative number, got {0}")]
    InvalidBlur(f64),

    #[error("seed must be finite, got {0}")]
    NonFiniteSeed(f64),

    #[error("unknown palette `{0}`")]
    UnknownPalette(String),

    #[error(transparent)]
    Color(#[from] ColorParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSourceError {
    #[error("unknown time zone `{0}`")]
    UnknownZone(String),
}

/// Everything a render session can fail with. All variants surface at
/// construction; rendering a frame of a valid session does not fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClockError {
    #[error("invalid clock configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    TimeSource(#[from] TimeSourceError),
}
