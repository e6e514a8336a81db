mod cli;
mod commands;
mod face;
mod output;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use softtime_engine::logging::{LoggingConfig, init_logging};

use crate::cli::{Cli, Command};
use crate::settings::{apply_args, load_spec};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_verbosity(cli.verbose, cli.quiet));

    let base = load_spec(cli.config.as_deref())?;

    match cli.command {
        Command::Render { style, at, output } => {
            let spec = apply_args(base, &style)?;
            commands::render(&spec, at, output.as_deref())
        }
        Command::Chain { style, at } => {
            let spec = apply_args(base, &style)?;
            commands::chain(&spec, at)
        }
        Command::Watch { style, output, fps, duration } => {
            let spec = apply_args(base, &style)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("starting the tick runtime")?;
            runtime.block_on(commands::watch(&spec, &output, fps, duration))
        }
        Command::Gif { style, output, at, frames, step_ms, delay_ms } => {
            let spec = apply_args(base, &style)?;
            commands::gif(&spec, &output, at, frames, step_ms, delay_ms)
        }
        Command::Grid { theme, scheme, size, no_time, at, output } => {
            let base = softtime_clock::ClockSpec {
                size,
                scheme,
                show_time: base.show_time && !no_time,
                ..base
            };
            commands::grid(&base, theme, &output, at)
        }
    }
}
