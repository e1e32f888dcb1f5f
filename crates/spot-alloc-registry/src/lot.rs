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
use spot_alloc_core::{
    plate::PlateKey,
    slot::{SlotCapacity, SlotId},
};
use spot_alloc_model::{err::RegistryError, ticket::Ticket};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Single source of truth for slot occupancy.
///
/// Owns the fixed slot pool and two mutually consistent indices: active
/// tickets by slot, and occupied slots by plate. Every mutation goes
/// through one internal insert/remove pair, so the indices change
/// together or not at all; a rejected operation never leaves a partial
/// update behind.
///
/// The lot is an explicitly constructed value owned by its caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParkingLot {
    capacity: SlotCapacity,
    by_slot: HashMap<SlotId, Ticket>,
    by_plate: HashMap<PlateKey, SlotId>,
}

impl ParkingLot {
    pub fn new(capacity: SlotCapacity) -> Self {
        ParkingLot {
            capacity,
            by_slot: HashMap::new(),
            by_plate: HashMap::new(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> SlotCapacity {
        self.capacity
    }

    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.by_slot.len()
    }

    #[inline]
    pub fn available_count(&self) -> usize {
        self.capacity.value() - self.by_slot.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.by_slot.len() >= self.capacity.value()
    }

    #[inline]
    pub fn is_parked(&self, plate: &PlateKey) -> bool {
        self.by_plate.contains_key(plate)
    }

    /// Lowest-numbered free slot, or `None` when the lot is full.
    pub fn find_available_slot(&self) -> Option<SlotId> {
        self.capacity
            .iter_slots()
            .find(|slot| !self.by_slot.contains_key(slot))
    }

    /// Check a vehicle in against the current wall clock.
    pub fn check_in(
        &mut self,
        tenant: impl Into<String>,
        plate: PlateKey,
    ) -> Result<Ticket, RegistryError> {
        self.check_in_at(tenant, plate, Utc::now())
    }

    /// Check a vehicle in with an explicit check-in instant.
    ///
    /// Rejects with [`RegistryError::AlreadyParked`] if the plate already
    /// holds a slot and [`RegistryError::LotFull`] if no slot is free;
    /// neither rejection mutates the lot. The caller decides whether a
    /// `LotFull` claim goes onto the waiting queue.
    #[instrument(skip_all, fields(plate = %plate), err(Display))]
    pub fn check_in_at(
        &mut self,
        tenant: impl Into<String>,
        plate: PlateKey,
        at: DateTime<Utc>,
    ) -> Result<Ticket, RegistryError> {
        if self.by_plate.contains_key(&plate) {
            return Err(RegistryError::AlreadyParked(plate));
        }
        let slot = self.find_available_slot().ok_or(RegistryError::LotFull)?;
        let ticket = Ticket::open(tenant, plate, slot, at);
        self.insert(ticket.clone());
        debug!(slot = slot.value(), "checked in");
        Ok(ticket)
    }

    /// Check the occupant of `slot` out against the current wall clock.
    pub fn check_out(&mut self, slot: SlotId) -> Result<Ticket, RegistryError> {
        self.check_out_at(slot, Utc::now())
    }

    /// Check the occupant of `slot` out with an explicit instant.
    ///
    /// Returns the closed ticket; the slot is free again afterwards.
    #[instrument(skip_all, fields(slot = slot.value()), err(Display))]
    pub fn check_out_at(
        &mut self,
        slot: SlotId,
        at: DateTime<Utc>,
    ) -> Result<Ticket, RegistryError> {
        if !self.capacity.contains(slot) {
            return Err(RegistryError::InvalidSlot {
                slot,
                capacity: self.capacity,
            });
        }
        let ticket = self.remove(slot).ok_or(RegistryError::SlotVacant(slot))?;
        let closed = ticket.close(at);
        debug!(plate = %closed.plate(), dwell = %closed.dwell_time_at(at), "checked out");
        Ok(closed)
    }

    /// Live ticket for a plate, O(1) through the plate index.
    pub fn search(&self, plate: &PlateKey) -> Result<&Ticket, RegistryError> {
        let slot = self
            .by_plate
            .get(plate)
            .ok_or_else(|| RegistryError::PlateNotFound(plate.clone()))?;
        Ok(self
            .by_slot
            .get(slot)
            .expect("plate index points at an occupied slot"))
    }

    #[inline]
    pub fn ticket_for_slot(&self, slot: SlotId) -> Option<&Ticket> {
        self.by_slot.get(&slot)
    }

    /// Copy of all active tickets, ascending by slot number.
    pub fn parked_tickets(&self) -> Vec<Ticket> {
        let mut tickets: Vec<Ticket> = self.by_slot.values().cloned().collect();
        tickets.sort_by_key(Ticket::slot);
        tickets
    }

    #[inline]
    pub fn iter_tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.by_slot.values()
    }

    /// Free slot numbers in ascending order.
    pub fn free_slots(&self) -> Vec<SlotId> {
        self.capacity
            .iter_slots()
            .filter(|slot| !self.by_slot.contains_key(slot))
            .collect()
    }

    /// Occupied share of the pool in percent.
    pub fn occupancy_rate(&self) -> f64 {
        if self.capacity.value() == 0 {
            return 0.0;
        }
        self.by_slot.len() as f64 * 100.0 / self.capacity.value() as f64
    }

    // The only two places that touch the indices. Both maps change
    // together or not at all.

    pub(crate) fn insert(&mut self, ticket: Ticket) {
        self.by_plate.insert(ticket.plate().clone(), ticket.slot());
        self.by_slot.insert(ticket.slot(), ticket);
    }

    fn remove(&mut self, slot: SlotId) -> Option<Ticket> {
        let ticket = self.by_slot.remove(&slot)?;
        self.by_plate.remove(ticket.plate());
        Some(ticket)
    }
}

#[cfg(test)]
mod lot_tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use spot_alloc_core::time::DwellTime;
    use spot_alloc_model::queue::{ClaimRequest, WaitingQueue};
    use std::collections::HashSet;

    fn plate(raw: &str) -> PlateKey {
        PlateKey::new(raw).expect("valid plate")
    }

    fn t(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn lot(capacity: usize) -> ParkingLot {
        ParkingLot::new(SlotCapacity::new(capacity))
    }

    #[test]
    fn test_check_in_assigns_lowest_slot_first() {
        let mut lot = lot(3);
        let a = lot.check_in_at("Alice", plate("AAA-1"), t(0)).unwrap();
        let b = lot.check_in_at("Bob", plate("BBB-2"), t(1)).unwrap();
        let c = lot.check_in_at("Cara", plate("CCC-3"), t(2)).unwrap();
        assert_eq!(a.slot(), SlotId::new(1));
        assert_eq!(b.slot(), SlotId::new(2));
        assert_eq!(c.slot(), SlotId::new(3));
        assert!(matches!(
            lot.check_in_at("Dan", plate("DDD-4"), t(3)),
            Err(RegistryError::LotFull)
        ));
    }

    #[test]
    fn test_full_lot_rejects_without_mutation() {
        let mut lot = lot(2);
        lot.check_in_at("Alice", plate("AAA-1"), t(0)).unwrap();
        lot.check_in_at("Bob", plate("BBB-2"), t(1)).unwrap();
        assert!(matches!(
            lot.check_in_at("Cara", plate("CCC-3"), t(2)),
            Err(RegistryError::LotFull)
        ));
        assert_eq!(lot.occupied_count(), 2);
        assert!(!lot.is_parked(&plate("CCC-3")));
    }

    #[test]
    fn test_duplicate_plate_rejected_without_mutation() {
        let mut lot = lot(3);
        lot.check_in_at("Alice", plate("AAA-1"), t(0)).unwrap();
        let before = lot.clone();
        assert!(matches!(
            lot.check_in_at("Alice again", plate("aaa-1"), t(5)),
            Err(RegistryError::AlreadyParked(_))
        ));
        assert_eq!(lot, before);
    }

    #[test]
    fn test_round_trip_check_in_and_out() {
        let mut lot = lot(3);
        let ticket = lot.check_in_at("Alice", plate("ABC-123"), t(0)).unwrap();
        let closed = lot.check_out_at(ticket.slot(), t(40)).unwrap();
        assert_eq!(closed.plate(), &plate("ABC-123"));
        assert!(!closed.is_active());
        assert!(closed.checked_out_at().unwrap() >= closed.checked_in_at());
        assert_eq!(closed.dwell_time_at(t(999)), DwellTime::from_minutes(40));
        assert!(matches!(
            lot.search(&plate("ABC-123")),
            Err(RegistryError::PlateNotFound(_))
        ));
        assert_eq!(lot.occupied_count(), 0);
    }

    #[test]
    fn test_freed_lowest_slot_is_reused_first() {
        let mut lot = lot(3);
        lot.check_in_at("Alice", plate("AAA-1"), t(0)).unwrap();
        lot.check_in_at("Bob", plate("BBB-2"), t(1)).unwrap();
        lot.check_in_at("Cara", plate("CCC-3"), t(2)).unwrap();
        lot.check_out_at(SlotId::new(2), t(10)).unwrap();
        let next = lot.check_in_at("Dan", plate("DDD-4"), t(11)).unwrap();
        assert_eq!(next.slot(), SlotId::new(2));
    }

    #[test]
    fn test_check_out_vacant_slot_rejected_without_mutation() {
        let mut lot = lot(3);
        lot.check_in_at("Alice", plate("AAA-1"), t(0)).unwrap();
        let before = lot.clone();
        assert!(matches!(
            lot.check_out_at(SlotId::new(2), t(5)),
            Err(RegistryError::SlotVacant(_))
        ));
        assert_eq!(lot, before);
    }

    #[test]
    fn test_check_out_out_of_range_slot_rejected() {
        let mut lot = lot(3);
        lot.check_in_at("Alice", plate("AAA-1"), t(0)).unwrap();
        let before = lot.clone();
        assert!(matches!(
            lot.check_out_at(SlotId::new(0), t(5)),
            Err(RegistryError::InvalidSlot { .. })
        ));
        assert!(matches!(
            lot.check_out_at(SlotId::new(4), t(5)),
            Err(RegistryError::InvalidSlot { .. })
        ));
        assert_eq!(lot, before);
    }

    #[test]
    fn test_search_agrees_with_is_parked() {
        let mut lot = lot(3);
        lot.check_in_at("Alice", plate("AAA-1"), t(0)).unwrap();
        for key in [plate("AAA-1"), plate("ZZZ-9")] {
            assert_eq!(lot.search(&key).is_ok(), lot.is_parked(&key));
        }
    }

    #[test]
    fn test_search_finds_live_ticket() {
        let mut lot = lot(3);
        lot.check_in_at("Alice", plate("AAA-1"), t(0)).unwrap();
        let ticket = lot.search(&plate("aaa-1")).unwrap();
        assert_eq!(ticket.tenant(), "Alice");
        assert_eq!(ticket.slot(), SlotId::new(1));
        assert!(ticket.is_active());
    }

    #[test]
    fn test_listing_is_sorted_unique_and_consistent_with_counts() {
        let mut lot = lot(5);
        lot.check_in_at("Alice", plate("AAA-1"), t(0)).unwrap();
        lot.check_in_at("Bob", plate("BBB-2"), t(1)).unwrap();
        lot.check_in_at("Cara", plate("CCC-3"), t(2)).unwrap();
        lot.check_out_at(SlotId::new(1), t(10)).unwrap();
        lot.check_in_at("Dan", plate("DDD-4"), t(11)).unwrap();

        let listed = lot.parked_tickets();
        assert_eq!(listed.len(), lot.occupied_count());

        let slots: Vec<SlotId> = listed.iter().map(|ticket| ticket.slot()).collect();
        let mut sorted = slots.clone();
        sorted.sort();
        assert_eq!(slots, sorted);

        let unique: HashSet<SlotId> = slots.iter().copied().collect();
        assert_eq!(unique.len(), slots.len());
        for slot in &slots {
            assert!(lot.capacity().contains(*slot));
        }
    }

    #[test]
    fn test_counts_and_occupancy_rate() {
        let mut lot = lot(4);
        assert_eq!(lot.available_count(), 4);
        assert!(!lot.is_full());
        lot.check_in_at("Alice", plate("AAA-1"), t(0)).unwrap();
        lot.check_in_at("Bob", plate("BBB-2"), t(1)).unwrap();
        assert_eq!(lot.occupied_count(), 2);
        assert_eq!(lot.available_count(), 2);
        assert_eq!(lot.capacity().value(), 4);
        assert_eq!(lot.occupancy_rate(), 50.0);
        assert_eq!(lot.free_slots(), vec![SlotId::new(3), SlotId::new(4)]);
    }

    #[test]
    fn test_ticket_for_slot() {
        let mut lot = lot(3);
        lot.check_in_at("Alice", plate("AAA-1"), t(0)).unwrap();
        assert!(lot.ticket_for_slot(SlotId::new(1)).is_some());
        assert!(lot.ticket_for_slot(SlotId::new(2)).is_none());
    }

    #[test]
    fn test_single_slot_overflow_through_waiting_queue() {
        let mut lot = lot(1);
        let mut waiting = WaitingQueue::new();

        let first = lot.check_in_at("A", plate("P1"), t(0)).unwrap();
        assert_eq!(first.slot(), SlotId::new(1));

        match lot.check_in_at("B", plate("P2"), t(1)) {
            Err(RegistryError::LotFull) => {
                waiting.enqueue(ClaimRequest::new("B", plate("P2")));
            }
            other => panic!("expected LotFull, got {:?}", other),
        }

        lot.check_out_at(SlotId::new(1), t(30)).unwrap();

        let promoted = waiting.dequeue().expect("one claim waiting");
        let (tenant, key) = promoted.into_parts();
        let ticket = lot.check_in_at(tenant, key, t(31)).unwrap();
        assert_eq!(ticket.slot(), SlotId::new(1));
        assert_eq!(ticket.plate(), &plate("P2"));
        assert!(waiting.is_empty());
    }

    #[test]
    fn test_default_lot_has_ten_slots() {
        assert_eq!(ParkingLot::default().capacity().value(), 10);
    }
}
