use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use softtime_clock::Theme;

#[derive(Debug, Parser)]
#[command(name = "softtime")]
#[command(about = "Soft Time - a clock drawn as a chain of nested, blurred circles")]
#[command(version)]
pub struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML file with clock settings; flags override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw a single frame
    Render {
        #[command(flatten)]
        style: StyleArgs,

        /// Instant to draw (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,

        /// Output file (.svg or .png); SVG goes to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the generated chain (and its layout at an instant) as JSON
    Chain {
        #[command(flatten)]
        style: StyleArgs,

        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },

    /// Keep redrawing an output file from the live clock
    Watch {
        #[command(flatten)]
        style: StyleArgs,

        /// Output file (.svg or .png), rewritten every frame
        #[arg(short, long)]
        output: PathBuf,

        /// Target frame rate
        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Stop after this many seconds (runs until Ctrl-C otherwise)
        #[arg(long)]
        duration: Option<f64>,
    },

    /// Capture an animated GIF
    Gif {
        #[command(flatten)]
        style: StyleArgs,

        #[arg(short, long)]
        output: PathBuf,

        /// First frame instant (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,

        #[arg(long, default_value_t = 60)]
        frames: u32,

        /// Clock time between frames, in milliseconds
        #[arg(long, default_value_t = 50)]
        step_ms: u32,

        /// Playback delay per frame; defaults to the step (real-time playback)
        #[arg(long)]
        delay_ms: Option<u32>,
    },

    /// Six faces, one per preset zone, in a single PNG
    Grid {
        #[arg(long, default_value_t = Theme::Dark)]
        theme: Theme,

        #[arg(long, default_value = "Gradient")]
        scheme: String,

        /// Face size in pixels
        #[arg(long, default_value_t = 300.0)]
        size: f64,

        #[arg(long)]
        no_time: bool,

        #[arg(long)]
        at: Option<DateTime<Utc>>,

        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Per-face settings shared by the single-face commands.
#[derive(Debug, Clone, Default, Args)]
pub struct StyleArgs {
    /// Canvas size in pixels
    #[arg(long)]
    pub size: Option<f64>,

    #[arg(long)]
    pub seed: Option<f64>,

    /// Gradient, Solid or Outline
    #[arg(long)]
    pub scheme: Option<String>,

    /// Blur radius of the gradient pass
    #[arg(long)]
    pub blur: Option<f64>,

    #[arg(long)]
    pub background: Option<String>,

    /// Comma-separated palette, hub color first
    #[arg(long, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// Built-in palette name (see --theme)
    #[arg(long)]
    pub palette: Option<String>,

    /// Picks the background and the palette family
    #[arg(long)]
    pub theme: Option<Theme>,

    /// IANA time zone
    #[arg(long)]
    pub zone: Option<String>,

    /// Caption under the face
    #[arg(long)]
    pub label: Option<String>,

    #[arg(long)]
    pub circles: Option<usize>,

    /// Hub radius as a fraction of half the canvas
    #[arg(long)]
    pub radius_scale: Option<f64>,

    /// Hide the zone and time caption
    #[arg(long)]
    pub no_time: bool,
}
