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
use spot_alloc_core::time::TIMESTAMP_FORMAT;
use spot_alloc_model::ticket::Ticket;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalAction {
    CheckIn,
    CheckOut,
}

impl Display for JournalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JournalAction::CheckIn => write!(f, "CHECK_IN"),
            JournalAction::CheckOut => write!(f, "CHECK_OUT"),
        }
    }
}

/// Append-only transaction log.
///
/// Appends are fire-and-forget: a failed write is reported through
/// `tracing` and never affects the registry mutation it records.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Journal { path: path.into() }
    }

    pub fn record(&self, action: JournalAction, ticket: &Ticket) {
        let entry = format_entry(Utc::now(), action, ticket);
        if let Err(error) = self.append(&entry) {
            warn!(%error, path = %self.path.display(), "transaction log append failed");
        }
    }

    fn append(&self, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry)
    }
}

fn format_entry(at: DateTime<Utc>, action: JournalAction, ticket: &Ticket) -> String {
    format!(
        "[{}] Action: {} | Tenant: {} | Plate: {} | Spot: {} | Check-in: {}",
        at.format(TIMESTAMP_FORMAT),
        action,
        ticket.tenant(),
        ticket.plate(),
        ticket.slot().value(),
        ticket.checked_in_at().format(TIMESTAMP_FORMAT)
    )
}

#[cfg(test)]
mod journal_tests {
    use super::*;
    use chrono::TimeZone;
    use spot_alloc_core::{plate::PlateKey, slot::SlotId};

    #[test]
    fn test_entry_rendering_is_stable() {
        let checked_in = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let logged_at = Utc.with_ymd_and_hms(2025, 1, 1, 10, 5, 0).unwrap();
        let ticket = Ticket::open(
            "Alice",
            PlateKey::new("abc-123").expect("valid plate"),
            SlotId::new(3),
            checked_in,
        );
        assert_eq!(
            format_entry(logged_at, JournalAction::CheckIn, &ticket),
            "[2025-01-01 10:05:00] Action: CHECK_IN | Tenant: Alice | Plate: ABC-123 \
             | Spot: 3 | Check-in: 2025-01-01 10:00:00"
        );
    }
}
