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

//! # Spot Allocation Registry (`spot-alloc-registry`)
//!
//! The allocation engine: [`ParkingLot`] owns the fixed slot pool and the
//! two occupancy indices (ticket by slot, slot by plate), and is the
//! single place where either index is mutated. [`LotSnapshot`] is the
//! serializable capture handed to the persistence collaborator.
//!
//! The registry performs no I/O and holds no locks; a process that shares
//! a lot across threads wraps it in its own mutual exclusion.

pub mod lot;
pub mod snapshot;

pub use lot::ParkingLot;
pub use snapshot::LotSnapshot;
