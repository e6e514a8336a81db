use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use softtime_engine::coords::Viewport;
use softtime_engine::surface::DrawSurface;

use crate::chain::{Circle, generate_chain};
use crate::config::{ClockSpec, ResolvedSpec};
use crate::error::ClockError;
use crate::frame::paint_frame;
use crate::layout::{Position, walk_chain};
use crate::reading::ClockReading;
use crate::style::StyleConfig;
use crate::time_source::{TimeSource, ZonedTimeSource};

/// What one call to [`RenderSession::render_frame`] drew.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame_index: u64,
    pub reading: ClockReading,
    pub positions: Vec<Position>,
}

/// Totals returned when a session is disposed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames_rendered: u64,
}

/// One clock face: a fixed chain, fixed styling, a time source, and a frame
/// counter.
///
/// Sessions share nothing; several can render side by side as long as each
/// paints its own surface.
#[derive(Debug)]
pub struct RenderSession<T = ZonedTimeSource> {
    size: f64,
    seed: f64,
    chain: Vec<Circle>,
    style: StyleConfig,
    source: T,
    label: String,
    show_time: bool,
    frames: u64,
}

impl RenderSession<ZonedTimeSource> {
    /// Validates `spec` and generates the chain; time comes from the wall
    /// clock in `spec.time_zone`.
    ///
    /// Every configuration or zone problem is reported here; a constructed
    /// session cannot fail to render.
    pub fn new(spec: &ClockSpec) -> Result<Self, ClockError> {
        let resolved = spec.resolve()?;
        let source = resolved.source;
        Ok(Self::from_resolved(resolved, source))
    }
}

impl<T: TimeSource> RenderSession<T> {
    /// Like [`RenderSession::new`], with time read from `source`.
    ///
    /// `spec` is still validated in full, zone name included.
    pub fn with_time_source(spec: &ClockSpec, source: T) -> Result<Self, ClockError> {
        Ok(Self::from_resolved(spec.resolve()?, source))
    }

    fn from_resolved(resolved: ResolvedSpec, source: T) -> Self {
        let chain = generate_chain(resolved.base_radius, resolved.circle_count, resolved.seed);

        log::debug!(
            "session `{}`: {} circles, seed {}, scheme {}, zone {}",
            resolved.label,
            chain.len(),
            resolved.seed,
            resolved.style.scheme,
            source.zone().name(),
        );

        Self {
            size: resolved.size,
            seed: resolved.seed,
            chain,
            style: resolved.style,
            source,
            label: resolved.label,
            show_time: resolved.show_time,
            frames: 0,
        }
    }

    #[inline]
    pub fn chain(&self) -> &[Circle] {
        &self.chain
    }

    #[inline]
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    #[inline]
    pub fn seed(&self) -> f64 {
        self.seed
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// The square canvas the chain is laid out on.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::square(self.size as f32)
    }

    #[inline]
    pub fn time_zone(&self) -> Tz {
        self.source.zone()
    }

    #[inline]
    pub fn time_source(&self) -> &T {
        &self.source
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn show_time(&self) -> bool {
        self.show_time
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Circle centers for `reading`, walked from the canvas center.
    pub fn layout(&self, reading: &ClockReading) -> Vec<Position> {
        let half = self.size / 2.0;
        let angles = reading.angles().per_circle(self.chain.len());
        walk_chain(&self.chain, &angles, Position { cx: half, cy: half })
    }

    /// Reads the clock at `at`, lays out the chain and paints it.
    pub fn render_frame<S>(&mut self, at: DateTime<Utc>, surface: &mut S) -> FrameReport
    where
        S: DrawSurface + ?Sized,
    {
        let reading = self.source.reading_at(at);
        let positions = self.layout(&reading);
        paint_frame(surface, self.size as f32, &self.chain, &positions, &self.style);

        let frame_index = self.frames;
        self.frames += 1;
        if frame_index == 0 {
            log::debug!("session `{}`: first frame at {reading:?}", self.label);
        } else {
            log::trace!("session `{}`: frame {frame_index}", self.label);
        }

        FrameReport { frame_index, reading, positions }
    }

    /// Renders the instant the time source calls "now".
    pub fn render_now<S>(&mut self, surface: &mut S) -> FrameReport
    where
        S: DrawSurface + ?Sized,
    {
        let now = self.source.now();
        self.render_frame(now, surface)
    }

    /// Ends the session. Tick subscriptions driving it must be released by
    /// their owner before or together with this call.
    pub fn dispose(self) -> SessionSummary {
        log::debug!("session `{}` disposed after {} frames", self.label, self.frames);
        SessionSummary { frames_rendered: self.frames }
    }
}
