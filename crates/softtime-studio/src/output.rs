use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use image::RgbaImage;
use softtime_engine::render::{Rasterizer, SvgRenderer, write_png};
use softtime_engine::scene::DrawList;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputKind {
    Svg,
    Png,
}

impl OutputKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            _ => bail!("{}: expected a .svg or .png file", path.display()),
        }
    }
}

/// SVG serialization plus, on demand, rasterization.
///
/// The rasterizer (and its font database) is only built for raster output,
/// and raster output gets raster-flavored SVG.
pub struct FrameWriter {
    svg: SvgRenderer,
    rasterizer: Option<Rasterizer>,
}

impl FrameWriter {
    pub fn new(kind: OutputKind, with_text: bool) -> Self {
        match kind {
            OutputKind::Svg => Self { svg: SvgRenderer::new(), rasterizer: None },
            OutputKind::Png => Self { svg: SvgRenderer::for_raster(), rasterizer: Some(Rasterizer::new(with_text)) },
        }
    }

    /// Always rasterizes; for GIF frames and grid tiles.
    pub fn raster(with_text: bool) -> Self {
        Self::new(OutputKind::Png, with_text)
    }

    pub fn svg(&self, list: &mut DrawList) -> String {
        self.svg.render(list)
    }

    /// The serializer matching this writer's output, for frames built elsewhere.
    pub fn renderer(&self) -> &SvgRenderer {
        &self.svg
    }

    pub fn image(&self, list: &mut DrawList) -> Result<RgbaImage> {
        match &self.rasterizer {
            Some(r) => r.render(list),
            None => bail!("writer was built for svg output only"),
        }
    }

    /// Replaces `path` with the frame, never leaving a half-written file.
    pub fn write(&self, svg: &str, path: &Path) -> Result<()> {
        let tmp = temp_sibling(path);
        match &self.rasterizer {
            None => fs::write(&tmp, svg).with_context(|| format!("writing {}", tmp.display()))?,
            Some(r) => write_png(&tmp, &r.rasterize(svg)?)?,
        }
        fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}
