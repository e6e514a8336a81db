//! Clock readings and the time-to-angle mapping.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

/// Angle 0 points up.
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// Number of chain positions with a time-derived angle (hub + four hands).
pub const MAX_HANDS: usize = 5;

/// Zone-local wall time reduced to what the face displays.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClockReading {
    /// 0..=11
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// Sub-second part; identical in every zone.
    pub milliseconds: u32,
}

impl ClockReading {
    /// Normalizes out-of-range fields: hours wrap at 12, milliseconds at 1000.
    pub fn new(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        Self {
            hours: hours % 12,
            minutes: minutes % 60,
            seconds: seconds % 60,
            milliseconds: milliseconds % 1000,
        }
    }

    pub fn angles(&self) -> ClockAngles {
        ClockAngles::from_reading(self)
    }
}

/// Hand angles in radians, measured clockwise from "up".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
    pub millisecond: f64,
}

impl ClockAngles {
    pub fn from_reading(r: &ClockReading) -> Self {
        let ms = r.milliseconds as f64;
        Self {
            millisecond: (ms / 1000.0) * TAU,
            second: ((r.seconds as f64 * 1000.0 + ms) / 60000.0) * TAU,
            minute: (r.minutes as f64 / 60.0) * TAU,
            hour: ((r.hours % 12) as f64 / 12.0) * TAU,
        }
    }

    /// Angle for each chain index: hub, hour, minute, second, millisecond.
    ///
    /// Chains shorter than [`MAX_HANDS`] take a prefix.
    pub fn per_circle(&self, count: usize) -> Vec<f64> {
        [0.0, self.hour, self.minute, self.second, self.millisecond]
            .into_iter()
            .take(count)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn midnight_is_all_zero() {
        let a = ClockReading::new(0, 0, 0, 0).angles();
        assert_eq!(a.per_circle(5), vec![0.0; 5]);
    }

    #[test]
    fn milliseconds_wrap_at_one_second() {
        let a = ClockReading::new(0, 0, 0, 0).angles();
        let b = ClockReading::new(0, 0, 0, 1000).angles();
        assert_eq!(a.millisecond, b.millisecond);
    }

    #[test]
    fn hours_wrap_at_twelve() {
        let a = ClockAngles::from_reading(&ClockReading { hours: 0, ..Default::default() });
        let b = ClockAngles::from_reading(&ClockReading { hours: 12, ..Default::default() });
        assert_eq!(a.hour, b.hour);
        assert_eq!(ClockReading::new(15, 0, 0, 0).hours, 3);
    }

    #[test]
    fn quarter_positions() {
        let a = ClockReading::new(3, 15, 15, 250).angles();
        assert!((a.hour - FRAC_PI_2).abs() < EPS);
        assert!((a.minute - FRAC_PI_2).abs() < EPS);
        assert!((a.millisecond - FRAC_PI_2).abs() < EPS);
        // 15.25 s of 60 s
        assert!((a.second - 15.25 / 60.0 * TAU).abs() < EPS);
    }

    #[test]
    fn second_hand_sweeps_with_milliseconds() {
        let a = ClockReading::new(0, 0, 30, 0).angles();
        let b = ClockReading::new(0, 0, 30, 500).angles();
        assert!(b.second > a.second);
        assert!((a.second - std::f64::consts::PI).abs() < EPS);
    }

    #[test]
    fn per_circle_takes_prefix() {
        let a = ClockReading::new(6, 0, 0, 0).angles();
        assert_eq!(a.per_circle(2), vec![0.0, std::f64::consts::PI]);
        assert_eq!(a.per_circle(9).len(), MAX_HANDS);
    }
}
