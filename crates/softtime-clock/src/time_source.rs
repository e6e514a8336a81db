//! Time sources: "what does the face show right now in this zone".

use chrono::{DateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::TimeSourceError;
use crate::reading::ClockReading;

/// Resolves an IANA zone name (`"UTC"`, `"Europe/Paris"`, ...).
///
/// Unknown names are an error; there is no fallback zone.
pub fn parse_zone(name: &str) -> Result<Tz, TimeSourceError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimeSourceError::UnknownZone(name.to_string()))
}

/// Where a session gets its time from: a zone and a notion of "now".
pub trait TimeSource {
    /// Zone the face's hands and caption are local to.
    fn zone(&self) -> Tz;

    /// The instant "now" for this source.
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn reading_at(&self, at: DateTime<Utc>) -> ClockReading {
        let local = self.zone().from_utc_datetime(&at.naive_utc());
        // Leap-second instants report 1000..=1999 ms; fold them into the second.
        let millis = at.timestamp_subsec_millis() % 1000;
        ClockReading::new(local.hour(), local.minute(), local.second(), millis)
    }

    fn reading(&self) -> ClockReading {
        self.reading_at(self.now())
    }

    /// `HH:MM:SS`, 24-hour, zone-local.
    fn format_hms(&self, at: DateTime<Utc>) -> String {
        self.zone().from_utc_datetime(&at.naive_utc()).format("%H:%M:%S").to_string()
    }
}

/// Wall clock in a named zone.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZonedTimeSource {
    zone: Tz,
}

impl ZonedTimeSource {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub fn from_name(name: &str) -> Result<Self, TimeSourceError> {
        parse_zone(name).map(Self::new)
    }
}

impl TimeSource for ZonedTimeSource {
    #[inline]
    fn zone(&self) -> Tz {
        self.zone
    }
}

/// A frozen instant; every "now" returns it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedTimeSource {
    at: DateTime<Utc>,
    zone: Tz,
}

impl FixedTimeSource {
    pub fn new(at: DateTime<Utc>, zone: Tz) -> Self {
        Self { at, zone }
    }

    pub fn utc(at: DateTime<Utc>) -> Self {
        Self::new(at, Tz::UTC)
    }
}

impl TimeSource for FixedTimeSource {
    fn zone(&self) -> Tz {
        self.zone
    }

    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
