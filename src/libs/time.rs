//! Clock-time arithmetic for shifts.
//!
//! Shift start and end are times of day without a date. Durations are
//! computed against a common reference day; an end time earlier than the
//! start time is read as falling on the following day, which covers shifts
//! crossing midnight.

use super::error::{Result, TrackerError};
use chrono::{Duration, NaiveTime};

/// Wire format of clock times in stored records and CLI input.
pub const CLOCK_FORMAT: &str = "%H:%M";

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Parses a 24-hour `HH:MM` clock time.
///
/// Seconds are rejected: stored records keep minute precision only, so any
/// accepted value survives a save and reload unchanged.
pub fn parse_clock_time(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, CLOCK_FORMAT).map_err(|_| TrackerError::InvalidTime(value.to_string()))
}

/// Gross length of a shift in fractional hours.
///
/// `start == end` is a zero-length shift, not a full day.
///
/// ```rust
/// use shiftbook::libs::time::{parse_clock_time, shift_hours};
///
/// let start = parse_clock_time("22:00").unwrap();
/// let end = parse_clock_time("06:00").unwrap();
/// assert_eq!(shift_hours(start, end), 8.0);
/// ```
pub fn shift_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut elapsed = end.signed_duration_since(start);
    if elapsed < Duration::zero() {
        elapsed += Duration::days(1);
    }
    elapsed.num_seconds() as f64 / SECONDS_PER_HOUR
}

/// Serde adapter storing a `NaiveTime` as an `HH:MM` string.
pub mod clock_format {
    use super::{parse_clock_time, CLOCK_FORMAT};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(CLOCK_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_clock_time(&raw).map_err(serde::de::Error::custom)
    }
}
