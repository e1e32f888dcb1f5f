// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Dwell-Time Arithmetic
//!
//! Occupancy episodes are measured in whole minutes: the dwell time of a
//! ticket is the floor of the interval between check-in and check-out
//! (or "now" while the ticket is still open).
//!
//! `DwellTime` keeps that measure as its own type instead of a bare
//! `i64`, so minute counts cannot be confused with slot numbers or other
//! integers, and carries the human rendering used by the console front
//! end (`"45 min"`, `"2h 5m"`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Timestamp rendering used across tickets, reports, and the journal.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Length of an occupancy episode in whole minutes.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct DwellTime(i64);

impl DwellTime {
    #[inline]
    pub const fn from_minutes(minutes: i64) -> Self {
        DwellTime(minutes)
    }

    #[inline]
    pub const fn zero() -> Self {
        DwellTime(0)
    }

    /// Whole minutes between two instants, floored.
    #[inline]
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        DwellTime(end.signed_duration_since(start).num_minutes())
    }

    #[inline]
    pub const fn total_minutes(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn hours(self) -> i64 {
        self.0 / 60
    }

    #[inline]
    pub const fn minutes_rem(self) -> i64 {
        self.0 % 60
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Display for DwellTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 <= 0 {
            write!(f, "0 min")
        } else if self.hours() > 0 {
            write!(f, "{}h {}m", self.hours(), self.minutes_rem())
        } else {
            write!(f, "{} min", self.0)
        }
    }
}

#[cfg(test)]
mod time_tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_between_floors_to_whole_minutes() {
        let start = at(10, 0, 0);
        assert_eq!(
            DwellTime::between(start, start + Duration::seconds(90)),
            DwellTime::from_minutes(1)
        );
        assert_eq!(
            DwellTime::between(start, start + Duration::seconds(59)),
            DwellTime::zero()
        );
    }

    #[test]
    fn test_hours_and_remainder() {
        let dwell = DwellTime::from_minutes(125);
        assert_eq!(dwell.hours(), 2);
        assert_eq!(dwell.minutes_rem(), 5);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(DwellTime::zero().to_string(), "0 min");
        assert_eq!(DwellTime::from_minutes(45).to_string(), "45 min");
        assert_eq!(DwellTime::from_minutes(125).to_string(), "2h 5m");
    }
}
