//! Paints one frame of a chain onto a [`DrawSurface`].

use softtime_engine::coords::{Rect, Vec2};
use softtime_engine::paint::{GradientAnchor, RadialGradient};
use softtime_engine::scene::Border;
use softtime_engine::surface::DrawSurface;

use crate::chain::Circle;
use crate::layout::Position;
use crate::style::{FillScheme, OUTLINE_WIDTH, StyleConfig};

/// Clears the `size`×`size` canvas and paints the chain in index order.
///
/// `chain`, `positions` and `style.colors` are expected to be index-aligned;
/// sessions guarantee this when they are constructed.
pub fn paint_frame<S>(surface: &mut S, size: f32, chain: &[Circle], positions: &[Position], style: &StyleConfig)
where
    S: DrawSurface + ?Sized,
{
    surface.clear_blur();
    surface.fill_rect(Rect::new(0.0, 0.0, size, size), style.background);

    let centers: Vec<Vec2> = positions.iter().map(|p| Vec2::from_f64(p.cx, p.cy)).collect();
    let circles = chain.iter().zip(&centers);

    match style.scheme {
        FillScheme::Outline => {
            let border = Border::new(OUTLINE_WIDTH, style.stroke_color());
            for (circle, &center) in circles {
                surface.stroke_circle(center, circle.radius as f32, border.clone());
            }
        }
        FillScheme::Solid => {
            for (i, (circle, &center)) in circles.enumerate() {
                surface.fill_circle(center, circle.radius as f32, style.color(i).into());
            }
        }
        FillScheme::Gradient => {
            surface.set_blur(style.blur);
            let mut prev_color = style.background;
            for (i, (circle, &center)) in circles.enumerate() {
                let color = style.color(i);
                // The last circle has nothing nested inside; its gradient
                // collapses onto its own center.
                let inner = match (chain.get(i + 1), centers.get(i + 1)) {
                    (Some(next), Some(&next_center)) => GradientAnchor::new(next_center, next.radius as f32),
                    _ => GradientAnchor::new(center, 0.0),
                };
                let outer = GradientAnchor::new(center, circle.radius as f32);
                let gradient = RadialGradient::two_stop(inner, outer, color, prev_color);
                surface.fill_circle(center, circle.radius as f32, gradient.into());
                prev_color = color;
            }
            surface.clear_blur();
        }
    }
}
