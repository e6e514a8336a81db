//! Chain walk: turns link offsets and hand angles into absolute centers.

use serde::Serialize;

use crate::chain::Circle;
use crate::reading::START_ANGLE;

/// Absolute center of one chain circle for one frame.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Position {
    pub cx: f64,
    pub cy: f64,
}

/// Walks the chain outward from `origin`.
///
/// Circle `i` is placed `chain[i].offset` away from circle `i - 1` in the
/// direction `START_ANGLE + angles[i]`; circles without an angle (chains
/// longer than `angles`) continue straight up from their parent.
pub fn walk_chain(chain: &[Circle], angles: &[f64], origin: Position) -> Vec<Position> {
    let mut cx = origin.cx;
    let mut cy = origin.cy;

    chain
        .iter()
        .enumerate()
        .map(|(i, circle)| {
            let theta = START_ANGLE + angles.get(i).copied().unwrap_or(0.0);
            cx += circle.offset * theta.cos();
            cy += circle.offset * theta.sin();
            Position { cx, cy }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::generate_chain;
    use crate::reading::ClockReading;

    const EPS: f64 = 1e-9;

    fn origin(cx: f64, cy: f64) -> Position {
        Position { cx, cy }
    }

    #[test]
    fn hub_stays_at_origin() {
        let chain = generate_chain(160.0, 5, 100.0);
        let angles = ClockReading::new(7, 23, 45, 678).angles().per_circle(5);
        let pos = walk_chain(&chain, &angles, origin(200.0, 200.0));
        assert_eq!(pos[0], origin(200.0, 200.0));
    }

    #[test]
    fn zero_angles_stack_straight_up() {
        let chain = generate_chain(160.0, 5, 100.0);
        let pos = walk_chain(&chain, &[0.0; 5], origin(200.0, 200.0));
        for i in 1..pos.len() {
            let (prev, cur) = (pos[i - 1], pos[i]);
            assert!((cur.cx - prev.cx).abs() < EPS, "circle {i} drifted sideways");
            assert!((prev.cy - cur.cy - chain[i].offset).abs() < EPS, "circle {i} not one offset above");
        }
    }

    #[test]
    fn each_link_has_its_offset_length() {
        let chain = generate_chain(120.0, 5, 3.3);
        let angles = ClockReading::new(4, 50, 12, 999).angles().per_circle(5);
        let pos = walk_chain(&chain, &angles, origin(0.0, 0.0));
        for i in 1..pos.len() {
            let d = ((pos[i].cx - pos[i - 1].cx).powi(2) + (pos[i].cy - pos[i - 1].cy).powi(2)).sqrt();
            assert!((d - chain[i].offset).abs() < EPS);
        }
    }

    #[test]
    fn quarter_turn_points_right() {
        let chain = [Circle { offset: 0.0, radius: 10.0 }, Circle { offset: 5.0, radius: 4.0 }];
        let pos = walk_chain(&chain, &[0.0, std::f64::consts::FRAC_PI_2], origin(0.0, 0.0));
        assert!((pos[1].cx - 5.0).abs() < EPS);
        assert!(pos[1].cy.abs() < EPS);
    }

    #[test]
    fn translating_origin_translates_every_center() {
        let chain = generate_chain(160.0, 5, 100.0);
        let angles = ClockReading::new(10, 8, 33, 120).angles().per_circle(5);
        let a = walk_chain(&chain, &angles, origin(200.0, 200.0));
        let b = walk_chain(&chain, &angles, origin(200.0 + 37.5, 200.0 - 12.25));
        for (p, q) in a.iter().zip(&b) {
            assert!((q.cx - p.cx - 37.5).abs() < EPS);
            assert!((q.cy - p.cy + 12.25).abs() < EPS);
        }
    }
}
