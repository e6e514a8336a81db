use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, TimeDelta, Utc};
use image::{Rgba, RgbaImage, imageops};
use serde::Serialize;
use softtime_clock::palette::watch_seed;
use softtime_clock::{Circle, ClockSpec, FrameReport, Theme, TimeSource, ZONE_PRESETS};
use softtime_engine::paint::Color;
use softtime_engine::render::{SvgRenderer, write_gif, write_png};
use softtime_engine::time::{TickControl, Ticker};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::face::Face;
use crate::output::{FrameWriter, OutputKind};

const GRID_COLUMNS: u32 = 3;

/// One frame at `at` (or now); SVG to stdout when no output is given.
pub fn render(spec: &ClockSpec, at: Option<DateTime<Utc>>, output: Option<&Path>) -> Result<()> {
    let mut face = Face::new(spec)?;
    let mut list = face.new_list();
    let report = face.draw(at.unwrap_or_else(Utc::now), &mut list);

    match output {
        None => {
            let svg = SvgRenderer::new().render(&mut list);
            println!("{svg}");
        }
        Some(path) => {
            let writer = FrameWriter::new(OutputKind::from_path(path)?, face.session().show_time());
            writer.write(&writer.svg(&mut list), path)?;
            log::info!("wrote {} ({:?})", path.display(), report.reading);
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ChainDump<'a> {
    seed: f64,
    base_radius: f64,
    time_zone: String,
    chain: &'a [Circle],
    frame: FrameReport,
}

/// The generated chain and its layout at `at`, as pretty JSON.
pub fn chain_json(spec: &ClockSpec, at: DateTime<Utc>) -> Result<String> {
    let face = Face::new(spec)?;
    let session = face.session();
    let reading = session.time_source().reading_at(at);
    let dump = ChainDump {
        seed: session.seed(),
        base_radius: spec.base_radius(),
        time_zone: session.time_zone().name().to_string(),
        chain: session.chain(),
        frame: FrameReport { frame_index: 0, positions: session.layout(&reading), reading },
    };
    serde_json::to_string_pretty(&dump).context("serializing chain")
}

pub fn chain(spec: &ClockSpec, at: Option<DateTime<Utc>>) -> Result<()> {
    println!("{}", chain_json(spec, at.unwrap_or_else(Utc::now))?);
    Ok(())
}

/// Redraws `output` from the live clock until Ctrl-C or `duration` seconds.
///
/// Frames are drawn on the tick task and handed over as SVG text; a frame
/// that arrives while the previous one is still being written is dropped.
pub async fn watch(spec: &ClockSpec, output: &Path, fps: u32, duration: Option<f64>) -> Result<()> {
    if let Some(secs) = duration.filter(|s| !(s.is_finite() && *s >= 0.0)) {
        bail!("--duration must be a non-negative number of seconds, got {secs}");
    }
    let kind = OutputKind::from_path(output)?;
    let mut face = Face::new(spec)?;
    let writer = FrameWriter::new(kind, face.session().show_time());
    let period = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));

    let (tx, mut rx) = mpsc::channel::<String>(1);
    let svg = writer.renderer().clone();
    let mut list = face.new_list();
    let handle = Ticker::new(period).spawn(move |tick| {
        face.draw(DateTime::<Utc>::from(tick.wall), &mut list);
        match tx.try_send(svg.render(&mut list)) {
            Ok(()) => TickControl::Continue,
            Err(TrySendError::Full(_)) => {
                log::trace!("frame {} dropped, writer busy", tick.frame_index);
                TickControl::Continue
            }
            Err(TrySendError::Closed(_)) => TickControl::Stop,
        }
    });
    log::info!("watching {} at {} fps", output.display(), fps.max(1));

    let stop_after = async {
        match duration {
            Some(secs) => tokio::time::sleep(Duration::from_secs_f64(secs)).await,
            None => std::future::pending::<()>().await,
        }
    };
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(stop_after, ctrl_c);

    let mut written = 0u64;
    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                log::info!("interrupted");
                break;
            }
            _ = &mut stop_after => break,
            frame = rx.recv() => match frame {
                Some(frame) => {
                    writer.write(&frame, output)?;
                    written += 1;
                }
                None => break,
            },
        }
    }

    handle.stop().await;
    log::info!("wrote {written} frames to {}", output.display());
    Ok(())
}

/// `frames` stills `step_ms` of clock time apart, looped as a GIF.
pub fn gif(
    spec: &ClockSpec,
    output: &Path,
    at: Option<DateTime<Utc>>,
    frames: u32,
    step_ms: u32,
    delay_ms: Option<u32>,
) -> Result<()> {
    if !output.extension().is_some_and(|e| e.eq_ignore_ascii_case("gif")) {
        bail!("{}: expected a .gif file", output.display());
    }
    if frames == 0 {
        bail!("--frames must be at least 1");
    }
    let mut face = Face::new(spec)?;
    let writer = FrameWriter::raster(face.session().show_time());
    let start = at.unwrap_or_else(Utc::now);
    let step = TimeDelta::milliseconds(i64::from(step_ms));

    let mut list = face.new_list();
    let mut images = Vec::with_capacity(frames as usize);
    let mut t = start;
    for _ in 0..frames {
        face.draw(t, &mut list);
        images.push(writer.image(&mut list)?);
        t += step;
    }

    write_gif(output, images, delay_ms.unwrap_or(step_ms))?;
    log::info!("wrote {} frames to {}", face.dispose(), output.display());
    Ok(())
}

/// Settings for grid tile `i`: preset zone, `i`-th palette of the theme,
/// the matching watch seed.
pub fn grid_face(base: &ClockSpec, theme: Theme, i: usize) -> ClockSpec {
    let preset = ZONE_PRESETS[i % ZONE_PRESETS.len()];
    ClockSpec {
        seed: watch_seed(i),
        colors: theme.palette_at(i).colors(),
        background: theme.background().to_string(),
        time_zone: preset.zone.to_string(),
        zone_label: Some(preset.label.to_string()),
        ..base.clone()
    }
}

/// One face per preset zone on a shared background, three per row.
pub fn grid(base: &ClockSpec, theme: Theme, output: &Path, at: Option<DateTime<Utc>>) -> Result<()> {
    if OutputKind::from_path(output)? != OutputKind::Png {
        bail!("{}: the grid is written as png", output.display());
    }
    let at = at.unwrap_or_else(Utc::now);
    let writer = FrameWriter::raster(base.show_time);

    let mut tiles = Vec::with_capacity(ZONE_PRESETS.len());
    for i in 0..ZONE_PRESETS.len() {
        let spec = grid_face(base, theme, i);
        let mut face = Face::new(&spec).with_context(|| format!("face for {}", spec.time_zone))?;
        let mut list = face.new_list();
        face.draw(at, &mut list);
        tiles.push(writer.image(&mut list)?);
        face.dispose();
    }

    let (w, h) = tiles.first().map(|t| t.dimensions()).unwrap_or_default();
    let rows = (tiles.len() as u32).div_ceil(GRID_COLUMNS);
    let bg = Color::parse(theme.background())?.to_srgb_u8();
    let mut canvas = RgbaImage::from_pixel(w * GRID_COLUMNS, h * rows, Rgba(bg));
    for (i, tile) in tiles.iter().enumerate() {
        let (col, row) = (i as u32 % GRID_COLUMNS, i as u32 / GRID_COLUMNS);
        imageops::overlay(&mut canvas, tile, i64::from(col * w), i64::from(row * h));
    }

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    write_png(output, &canvas)?;
    log::info!("wrote {}x{} grid to {}", canvas.width(), canvas.height(), output.display());
    Ok(())
}
