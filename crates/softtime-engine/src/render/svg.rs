use std::fmt::Write;

use crate::paint::{Color, ColorStop, Paint, RadialGradient};
use crate::scene::{CircleCmd, DrawCmd, DrawList, RectCmd, TextAnchor, TextCmd};

/// Serializes a recorded [`DrawList`] into a standalone SVG document.
///
/// Mapping:
/// - radial gradients become `<radialGradient>` in user space; the inner
///   anchor is the focal circle (`fx`/`fy`/`fr`), the outer anchor the end
///   circle (`cx`/`cy`/`r`)
/// - each distinct blur radius gets one `<filter>` with `feGaussianBlur`,
///   using the radius as the standard deviation (CSS `blur()` semantics)
///
/// resvg does not implement `fr`. Documents meant for
/// [`Rasterizer`](super::Rasterizer) are built with [`for_raster`](Self::for_raster),
/// which draws the inner disc in the first stop's color and starts the
/// gradient from a point focus with remapped stops.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    point_focus: bool,
}

const FONT_FAMILY: &str = "monospace";

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_raster() -> Self {
        Self { point_focus: true }
    }

    pub fn render(&self, list: &mut DrawList) -> String {
        let viewport = list.viewport();
        let mut defs = String::new();
        let mut body = String::new();
        let mut filters: Vec<f32> = Vec::new();
        let mut gradient_count = 0usize;

        for item in list.iter_in_paint_order() {
            let filter = item.blur.map(|radius| {
                let idx = match filters.iter().position(|&r| r == radius) {
                    Some(idx) => idx,
                    None => {
                        filters.push(radius);
                        let _ = write!(
                            defs,
                            r#"<filter id="blur{idx}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="{radius}"/></filter>"#,
                            idx = filters.len() - 1,
                            radius = num(radius),
                        );
                        filters.len() - 1
                    }
                };
                format!(r#" filter="url(#blur{idx})""#)
            });
            let filter = filter.as_deref().unwrap_or("");

            match &item.cmd {
                DrawCmd::Rect(cmd) => write_rect(&mut body, cmd, filter),
                DrawCmd::Circle(cmd) => match &cmd.fill {
                    None => write_circle(&mut body, cmd, r#"fill="none""#, filter),
                    Some(Paint::Solid(c)) => write_circle(&mut body, cmd, &solid_attrs(*c, "fill"), filter),
                    Some(Paint::RadialGradient(g)) => {
                        let id = format!("grad{gradient_count}");
                        gradient_count += 1;
                        let fill = format!(r#"fill="url(#{id})""#);
                        if self.point_focus && g.inner.radius > 0.0 {
                            write_gradient(&mut defs, &id, g, 0.0, &g.stops_from_focal_point());
                            write_point_focus_circle(&mut body, cmd, g, &fill, filter);
                        } else {
                            write_gradient(&mut defs, &id, g, g.inner.radius, &g.stops);
                            write_circle(&mut body, cmd, &fill, filter);
                        }
                    }
                },
                DrawCmd::Text(cmd) => self.write_text(&mut body, cmd, filter),
            }
        }

        let mut out = String::with_capacity(defs.len() + body.len() + 256);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(viewport.width),
            h = num(viewport.height),
        );
        if !defs.is_empty() {
            let _ = write!(out, "<defs>{defs}</defs>");
        }
        out.push_str(&body);
        out.push_str("</svg>");
        out
    }

    fn write_text(&self, out: &mut String, cmd: &TextCmd, filter: &str) {
        let anchor = match cmd.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let weight = if cmd.bold { "bold" } else { "normal" };
        let _ = write!(
            out,
            r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" font-weight="{weight}" text-anchor="{anchor}" {fill}{filter}>{text}</text>"#,
            x = num(cmd.origin.x),
            y = num(cmd.origin.y),
            family = FONT_FAMILY,
            size = num(cmd.size),
            fill = solid_attrs(cmd.color, "fill"),
            text = escape(&cmd.text),
        );
    }
}

fn write_rect(out: &mut String, cmd: &RectCmd, filter: &str) {
    let fill = solid_attrs(cmd.color, "fill");
    let _ = write!(
        out,
        r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" {fill}{filter}/>"#,
        x = num(cmd.rect.origin.x),
        y = num(cmd.rect.origin.y),
        w = num(cmd.rect.size.x),
        h = num(cmd.rect.size.y),
    );
}

fn write_circle(out: &mut String, cmd: &CircleCmd, fill: &str, filter: &str) {
    let stroke = match &cmd.stroke {
        Some(b) => format!(r#" {} stroke-width="{}""#, solid_attrs(b.color, "stroke"), num(b.width)),
        None => String::new(),
    };
    let _ = write!(
        out,
        r#"<circle cx="{cx}" cy="{cy}" r="{r}" {fill}{stroke}{filter}/>"#,
        cx = num(cmd.center.x),
        cy = num(cmd.center.y),
        r = num(cmd.radius),
    );
}

/// Gradient circle plus the inner disc on top, blurred as one group.
fn write_point_focus_circle(out: &mut String, cmd: &CircleCmd, g: &RadialGradient, fill: &str, filter: &str) {
    if !filter.is_empty() {
        let _ = write!(out, "<g{filter}>");
    }
    write_circle(out, cmd, fill, "");
    let _ = write!(
        out,
        r#"<circle cx="{cx}" cy="{cy}" r="{r}" {fill}/>"#,
        cx = num(g.inner.center.x),
        cy = num(g.inner.center.y),
        r = num(g.inner.radius),
        fill = solid_attrs(g.inner_color(), "fill"),
    );
    if !filter.is_empty() {
        out.push_str("</g>");
    }
}

fn write_gradient(out: &mut String, id: &str, g: &RadialGradient, fr: f32, stops: &[ColorStop]) {
    let fr = if fr > 0.0 { format!(r#" fr="{}""#, num(fr)) } else { String::new() };
    let _ = write!(
        out,
        r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{cx}" cy="{cy}" r="{r}" fx="{fx}" fy="{fy}"{fr}>"#,
        cx = num(g.outer.center.x),
        cy = num(g.outer.center.y),
        r = num(g.outer.radius),
        fx = num(g.inner.center.x),
        fy = num(g.inner.center.y),
    );
    for stop in stops {
        let _ = write!(
            out,
            r#"<stop offset="{t}" stop-color="{hex}" stop-opacity="{a}"/>"#,
            t = num(stop.t),
            hex = stop.color.to_hex(),
            a = num(stop.color.opacity()),
        );
    }
    out.push_str("</radialGradient>");
}

fn solid_attrs(color: Color, attr: &str) -> String {
    if color.is_transparent() {
        format!(r#"{attr}="none""#)
    } else if color.opacity() >= 1.0 {
        format!(r#"{attr}="{}""#, color.to_hex())
    } else {
        format!(r#"{attr}="{}" {attr}-opacity="{}""#, color.to_hex(), num(color.opacity()))
    }
}

/// Compact decimal: three fractional digits, trailing zeros dropped.
fn num(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
