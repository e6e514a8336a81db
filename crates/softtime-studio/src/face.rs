use chrono::{DateTime, Utc};
use softtime_clock::{ClockSpec, FrameReport, RenderSession, TimeSource};
use softtime_engine::coords::{Vec2, Viewport};
use softtime_engine::scene::{DrawList, TextAnchor, TextCmd};
use softtime_engine::surface::DrawSurface;

/// Height of the caption strip under a face.
const CAPTION_HEIGHT: f32 = 34.0;

/// A render session plus the host decoration around it: the zone caption
/// and the digital time readout.
#[derive(Debug)]
pub struct Face {
    session: RenderSession,
}

impl Face {
    pub fn new(spec: &ClockSpec) -> anyhow::Result<Self> {
        let session = RenderSession::new(spec).inspect_err(|e| log::warn!("rejected clock settings: {e}"))?;
        Ok(Self { session })
    }

    #[inline]
    pub fn session(&self) -> &RenderSession {
        &self.session
    }

    /// Canvas plus caption strip when the time is shown.
    pub fn viewport(&self) -> Viewport {
        let canvas = self.session.viewport();
        if self.session.show_time() {
            Viewport::new(canvas.width, canvas.height + CAPTION_HEIGHT)
        } else {
            canvas
        }
    }

    /// Records one frame at `at` into `list` (cleared first).
    pub fn draw(&mut self, at: DateTime<Utc>, list: &mut DrawList) -> FrameReport {
        list.clear();
        let report = self.session.render_frame(at, list);
        if self.session.show_time() {
            self.draw_caption(at, list);
        }
        report
    }

    pub fn new_list(&self) -> DrawList {
        DrawList::new(self.viewport())
    }

    fn draw_caption<S: DrawSurface + ?Sized>(&self, at: DateTime<Utc>, surface: &mut S) {
        let style = self.session.style();
        let canvas = self.session.viewport();
        let mid = canvas.width / 2.0;

        let strip = canvas.bounds().strip_below(CAPTION_HEIGHT);
        surface.fill_rect(strip, style.background);
        surface.draw_text(TextCmd {
            text: self.session.label().to_string(),
            size: 12.0,
            color: style.text_color(),
            bold: true,
            origin: Vec2::new(mid, strip.origin.y + 15.0),
            anchor: TextAnchor::Middle,
        });
        surface.draw_text(TextCmd {
            text: self.session.time_source().format_hms(at),
            size: 10.0,
            color: style.secondary_text_color(),
            bold: false,
            origin: Vec2::new(mid, strip.origin.y + 29.0),
            anchor: TextAnchor::Middle,
        });
    }

    pub fn dispose(self) -> u64 {
        self.session.dispose().frames_rendered
    }
}
