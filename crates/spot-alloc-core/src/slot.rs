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

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of a parking slot. Slots are numbered starting at 1.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct SlotId(usize);

impl SlotId {
    #[inline]
    pub const fn new(id: usize) -> Self {
        SlotId(id)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlotId({})", self.0)
    }
}

impl From<usize> for SlotId {
    #[inline]
    fn from(value: usize) -> Self {
        SlotId(value)
    }
}

/// Size of the slot pool, fixed at construction and never resized.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotCapacity(usize);

impl SlotCapacity {
    #[inline]
    pub const fn new(value: usize) -> Self {
        SlotCapacity(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Whether a slot number falls inside the pool, i.e. in `1..=N`.
    #[inline]
    pub const fn contains(self, slot: SlotId) -> bool {
        slot.value() >= 1 && slot.value() <= self.0
    }

    /// All slot numbers of the pool in ascending order.
    #[inline]
    pub fn iter_slots(self) -> impl Iterator<Item = SlotId> {
        (1..=self.0).map(SlotId::new)
    }
}

impl Default for SlotCapacity {
    #[inline]
    fn default() -> Self {
        SlotCapacity(10)
    }
}

impl Display for SlotCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlotCapacity({})", self.0)
    }
}

impl From<usize> for SlotCapacity {
    #[inline]
    fn from(value: usize) -> Self {
        SlotCapacity(value)
    }
}

#[cfg(test)]
mod slot_tests {
    use super::*;

    #[test]
    fn test_contains_is_one_based() {
        let capacity = SlotCapacity::new(3);
        assert!(!capacity.contains(SlotId::new(0)));
        assert!(capacity.contains(SlotId::new(1)));
        assert!(capacity.contains(SlotId::new(3)));
        assert!(!capacity.contains(SlotId::new(4)));
    }

    #[test]
    fn test_iter_slots_ascending() {
        let ids: Vec<usize> = SlotCapacity::new(4)
            .iter_slots()
            .map(SlotId::value)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_iter_slots_empty_pool() {
        assert_eq!(SlotCapacity::new(0).iter_slots().count(), 0);
    }

    #[test]
    fn test_default_capacity_is_ten() {
        assert_eq!(SlotCapacity::default().value(), 10);
    }
}
