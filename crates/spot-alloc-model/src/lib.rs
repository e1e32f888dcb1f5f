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

//! # Spot Allocation Model (`spot-alloc-model`)
//!
//! This crate provides the domain model for tracking a fixed pool of
//! numbered parking slots handed out to named tenants. It builds upon the
//! typed primitives defined in the `spot-alloc-core` crate to represent
//! occupancy episodes, rejected operations, and the overflow list used
//! when the lot is full.
//!
//! ## Key Data Structures
//!
//! - **`Ticket`**: One occupancy episode: who parked, under which plate,
//!   in which slot, and when. A ticket is created open by a check-in and
//!   closed exactly once by a check-out; it is never mutated afterwards.
//!
//! - **`RegistryError`**: The recoverable rejection reasons reported by
//!   registry operations (`AlreadyParked`, `LotFull`, `SlotVacant`,
//!   `PlateNotFound`, `InvalidSlot`). A rejected operation performs no
//!   mutation.
//!
//! - **`WaitingQueue`** / **`ClaimRequest`**: Strict FIFO overflow list of
//!   claims that found every slot occupied. The queue never reaches back
//!   into the registry; promoting the head into a fresh check-in is the
//!   caller's responsibility.
//!
//! - **`TrafficConfig`** / [`generator::generate_traffic`]: Reproducible,
//!   seeded generation of demo claims for exercising a lot in bulk.

pub mod err;
pub mod generator;
pub mod queue;
pub mod ticket;

pub mod prelude {
    pub use crate::err::RegistryError;
    pub use crate::generator::{TrafficConfig, generate_traffic};
    pub use crate::queue::{ClaimRequest, WaitingQueue};
    pub use crate::ticket::Ticket;
    pub use spot_alloc_core::plate::{InvalidPlateError, PlateKey};
    pub use spot_alloc_core::slot::{SlotCapacity, SlotId};
    pub use spot_alloc_core::time::DwellTime;
}
