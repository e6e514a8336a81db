use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageFormat, RgbaImage};
use resvg::{tiny_skia, usvg};

use super::SvgRenderer;
use crate::scene::DrawList;

/// Turns SVG documents produced by [`SvgRenderer`](super::SvgRenderer) into pixels.
///
/// Holds the parsed font database so repeated frames (live capture, GIF
/// export) do not rescan system fonts.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl Rasterizer {
    /// Creates a rasterizer; `load_system_fonts` enables overlay text.
    pub fn new(load_system_fonts: bool) -> Self {
        let mut options = usvg::Options::default();
        if load_system_fonts {
            options.fontdb_mut().load_system_fonts();
            log::debug!("rasterizer: {} font faces loaded", options.fontdb.len());
        }
        Self { options }
    }

    /// Serializes `list` for raster output and rasterizes it.
    pub fn render(&self, list: &mut DrawList) -> Result<RgbaImage> {
        self.rasterize(&SvgRenderer::for_raster().render(list))
    }

    /// Rasterizes at 1 output pixel per logical pixel, straight-alpha RGBA.
    pub fn rasterize(&self, svg: &str) -> Result<RgbaImage> {
        let tree = usvg::Tree::from_str(svg, &self.options).context("parsing generated svg")?;
        let size = tree.size().to_int_size();
        let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
            .ok_or_else(|| anyhow!("cannot allocate {}x{} pixmap", size.width(), size.height()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let mut rgba = Vec::with_capacity(pixmap.data().len());
        for px in pixmap.pixels() {
            let c = px.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(size.width(), size.height(), rgba)
            .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", size.width(), size.height()))
    }
}

pub fn write_png(path: &Path, image: &RgbaImage) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))
}

/// Writes an endlessly looping animated GIF with a fixed per-frame delay.
pub fn write_gif(path: &Path, frames: Vec<RgbaImage>, delay_ms: u32) -> Result<()> {
    if frames.is_empty() {
        return Err(anyhow!("refusing to write an empty animation to {}", path.display()));
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;
    let delay = Delay::from_numer_denom_ms(delay_ms, 1);
    encoder
        .encode_frames(frames.into_iter().map(|img| Frame::from_parts(img, 0, 0, delay)))
        .with_context(|| format!("encoding {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2, Viewport};
    use crate::paint::Color;
    use crate::paint::{GradientAnchor, RadialGradient};
    use crate::surface::DrawSurface;

    #[test]
    fn rasterizes_background_and_circle() {
        let mut list = DrawList::new(Viewport::square(20.0));
        list.fill_rect(Rect::new(0.0, 0.0, 20.0, 20.0), Color::BLACK);
        list.fill_circle(Vec2::new(10.0, 10.0), 5.0, Color::WHITE.into());
        let svg = SvgRenderer::new().render(&mut list);

        let img = Rasterizer::new(false).rasterize(&svg).unwrap();
        assert_eq!(img.dimensions(), (20, 20));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(10, 10).0, [255, 255, 255, 255]);
    }

    #[test]
    fn nested_circle_keeps_the_inner_color() {
        let mut list = DrawList::new(Viewport::square(100.0));
        list.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0), Color::BLACK);
        let g = RadialGradient::two_stop(
            GradientAnchor::new(Vec2::new(50.0, 40.0), 20.0),
            GradientAnchor::new(Vec2::new(50.0, 50.0), 45.0),
            Color::WHITE,
            Color::BLACK,
        );
        list.fill_circle(Vec2::new(50.0, 50.0), 45.0, g.into());

        let img = Rasterizer::new(false).render(&mut list).unwrap();
        assert_eq!(img.get_pixel(50, 50).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(50, 58).0, [255, 255, 255, 255]);
        assert!(img.get_pixel(50, 90).0[0] < 128, "ring fades towards the outer color");
    }

    #[test]
    fn malformed_svg_is_an_error() {
        assert!(Rasterizer::new(false).rasterize("<svg").is_err());
    }
}
