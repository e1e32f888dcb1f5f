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

use spot_alloc_core::{
    plate::PlateKey,
    slot::{SlotCapacity, SlotId},
};
use std::fmt::Display;

/// Rejection reasons reported by registry operations.
///
/// Every variant is a local, recoverable condition handed back to the
/// caller as a value; a rejected operation leaves the registry unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistryError {
    /// Check-in attempted for a plate that already holds a slot.
    AlreadyParked(PlateKey),
    /// Check-in attempted with every slot occupied.
    LotFull,
    /// Check-out attempted on a slot with no active ticket.
    SlotVacant(SlotId),
    /// Search for a plate that is not checked in.
    PlateNotFound(PlateKey),
    /// Slot number outside the pool.
    InvalidSlot {
        slot: SlotId,
        capacity: SlotCapacity,
    },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::AlreadyParked(plate) => {
                write!(f, "Vehicle with plate {} is already parked", plate)
            }
            RegistryError::LotFull => write!(f, "No parking slot available"),
            RegistryError::SlotVacant(slot) => {
                write!(f, "Spot #{} is currently vacant", slot.value())
            }
            RegistryError::PlateNotFound(plate) => {
                write!(f, "Vehicle with plate {} is not parked", plate)
            }
            RegistryError::InvalidSlot { slot, capacity } => {
                write!(
                    f,
                    "Spot #{} is outside the lot (1..={})",
                    slot.value(),
                    capacity.value()
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}
