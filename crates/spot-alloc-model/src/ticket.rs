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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spot_alloc_core::{
    plate::PlateKey,
    slot::SlotId,
    time::{DwellTime, TIMESTAMP_FORMAT},
};
use std::fmt::Display;

/// Record of one occupancy episode.
///
/// A ticket is open while `checked_out_at` is unset and closed once
/// check-out stamps it. The transition is one-way: [`Ticket::close`]
/// consumes the open ticket, so a closed record cannot be reopened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    tenant: String,
    plate: PlateKey,
    slot: SlotId,
    checked_in_at: DateTime<Utc>,
    checked_out_at: Option<DateTime<Utc>>,
}

impl Ticket {
    #[inline]
    pub fn open(
        tenant: impl Into<String>,
        plate: PlateKey,
        slot: SlotId,
        checked_in_at: DateTime<Utc>,
    ) -> Self {
        Ticket {
            tenant: tenant.into(),
            plate,
            slot,
            checked_in_at,
            checked_out_at: None,
        }
    }

    #[inline]
    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    #[inline]
    pub fn plate(&self) -> &PlateKey {
        &self.plate
    }

    #[inline]
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    #[inline]
    pub fn checked_in_at(&self) -> DateTime<Utc> {
        self.checked_in_at
    }

    #[inline]
    pub fn checked_out_at(&self) -> Option<DateTime<Utc>> {
        self.checked_out_at
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.checked_out_at.is_none()
    }

    /// Close the episode at `at`. Called exactly once, by check-out.
    #[inline]
    pub fn close(mut self, at: DateTime<Utc>) -> Self {
        debug_assert!(self.is_active(), "ticket closed twice");
        self.checked_out_at = Some(at);
        self
    }

    /// Dwell time measured against `now` while the ticket is open, and
    /// against the check-out stamp once it is closed.
    #[inline]
    pub fn dwell_time_at(&self, now: DateTime<Utc>) -> DwellTime {
        DwellTime::between(self.checked_in_at, self.checked_out_at.unwrap_or(now))
    }

    /// Dwell time as of the current wall clock. Recomputed on every call
    /// for open tickets; fixed for closed ones.
    #[inline]
    pub fn dwell_time(&self) -> DwellTime {
        self.dwell_time_at(Utc::now())
    }
}

impl Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Spot #{} | Tenant: {} | Plate: {} | Check-in: {}",
            self.slot.value(),
            self.tenant,
            self.plate,
            self.checked_in_at.format(TIMESTAMP_FORMAT)
        )
    }
}

#[cfg(test)]
mod ticket_tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn plate(raw: &str) -> PlateKey {
        PlateKey::new(raw).expect("valid plate")
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_open_ticket_is_active() {
        let ticket = Ticket::open("Alice", plate("ABC-123"), SlotId::new(1), t0());
        assert!(ticket.is_active());
        assert_eq!(ticket.checked_out_at(), None);
    }

    #[test]
    fn test_close_stamps_and_deactivates() {
        let out = t0() + Duration::minutes(30);
        let ticket = Ticket::open("Alice", plate("ABC-123"), SlotId::new(1), t0()).close(out);
        assert!(!ticket.is_active());
        assert_eq!(ticket.checked_out_at(), Some(out));
    }

    #[test]
    fn test_open_dwell_time_tracks_now() {
        let ticket = Ticket::open("Alice", plate("ABC-123"), SlotId::new(1), t0());
        let now = t0() + Duration::minutes(125);
        assert_eq!(ticket.dwell_time_at(now), DwellTime::from_minutes(125));
    }

    #[test]
    fn test_closed_dwell_time_is_fixed() {
        let out = t0() + Duration::minutes(40);
        let ticket = Ticket::open("Alice", plate("ABC-123"), SlotId::new(1), t0()).close(out);
        let much_later = t0() + Duration::minutes(500);
        assert_eq!(
            ticket.dwell_time_at(much_later),
            DwellTime::from_minutes(40)
        );
    }

    #[test]
    fn test_display_matches_report_line() {
        let ticket = Ticket::open("Alice", plate("abc-123"), SlotId::new(3), t0());
        assert_eq!(
            ticket.to_string(),
            "Spot #3 | Tenant: Alice | Plate: ABC-123 | Check-in: 2025-01-01 10:00:00"
        );
    }
}
