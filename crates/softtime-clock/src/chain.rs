//! Circle chain generation.
//!
//! A chain is an ordered list of circles where each circle's center sits at a
//! fixed distance from its predecessor's center. The distances and radii are
//! drawn once from the seeded [`Lcg`]; only the direction of each link changes
//! over time.

use serde::Serialize;

use crate::lcg::Lcg;

/// Link offset as a fraction of the parent radius.
const OFFSET_RANGE: (f64, f64) = (0.1, 0.2);
/// Child radius as a fraction of the parent's remaining space.
const SHRINK_RANGE: (f64, f64) = (0.8, 0.9);

/// One link of the chain.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Circle {
    /// Distance from the previous circle's center (0 for the hub).
    pub offset: f64,
    pub radius: f64,
}

/// Generates `count` circles starting from `base_radius`.
///
/// Each iteration records the current circle, then draws the next link's
/// offset and only afterwards the next radius. Callers validate
/// `base_radius > 0`; it is not clamped here.
pub fn generate_chain(base_radius: f64, count: usize, seed: f64) -> Vec<Circle> {
    let mut lcg = Lcg::from_seed(seed);
    let mut circles = Vec::with_capacity(count);
    let mut radius = base_radius;
    let mut offset = 0.0;

    for _ in 0..count {
        circles.push(Circle { offset, radius });
        offset = lcg.uniform(OFFSET_RANGE.0, OFFSET_RANGE.1) * radius;
        let remaining = radius - offset;
        radius = lcg.uniform(SHRINK_RANGE.0, SHRINK_RANGE.1) * remaining;
    }

    circles
}
