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

use crate::lot::ParkingLot;
use serde::{Deserialize, Serialize};
use spot_alloc_core::slot::SlotCapacity;
use spot_alloc_model::ticket::Ticket;
use tracing::info;

/// Serializable capture of a lot: the pool size plus every active ticket,
/// ascending by slot. The persistence collaborator decides where and how
/// the bytes land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSnapshot {
    capacity: SlotCapacity,
    tickets: Vec<Ticket>,
}

impl LotSnapshot {
    #[inline]
    pub fn new(capacity: SlotCapacity, tickets: Vec<Ticket>) -> Self {
        LotSnapshot { capacity, tickets }
    }

    #[inline]
    pub fn capacity(&self) -> SlotCapacity {
        self.capacity
    }

    #[inline]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }
}

impl ParkingLot {
    /// Capture the current occupancy for the persistence collaborator.
    pub fn snapshot(&self) -> LotSnapshot {
        LotSnapshot::new(self.capacity(), self.parked_tickets())
    }

    /// Rebuild a lot from a previously captured snapshot.
    ///
    /// The data is taken as previously valid: inserts are replayed
    /// directly, without re-running check-in validation.
    pub fn restore(snapshot: LotSnapshot) -> Self {
        let mut lot = ParkingLot::new(snapshot.capacity);
        for ticket in snapshot.tickets {
            lot.insert(ticket);
        }
        info!(
            capacity = lot.capacity().value(),
            occupied = lot.occupied_count(),
            "restored lot from snapshot"
        );
        lot
    }
}
