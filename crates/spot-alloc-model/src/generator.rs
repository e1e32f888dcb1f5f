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

//! Deterministic demo traffic.
//!
//! Generates reproducible streams of [`ClaimRequest`]s from a seeded RNG,
//! for the demo mode and for scenario tests that need bulk arrivals. The
//! same seed always yields the same traffic.

use crate::queue::ClaimRequest;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use spot_alloc_core::plate::PlateKey;
use std::fmt::Display;

const TENANT_NAMES: &[&str] = &[
    "Alice Reyes",
    "Bob Tanaka",
    "Cara Lindqvist",
    "Diego Fuentes",
    "Ezra Cohen",
    "Farah Aziz",
    "Grete Olsen",
    "Hiro Yamada",
    "Ines Moreau",
    "Jonas Weber",
    "Karin Vasquez",
    "Leon Petrov",
];

/// Configuration for one traffic run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficConfig {
    arrivals: usize,
    seed: u64,
}

impl TrafficConfig {
    #[inline]
    pub const fn new(arrivals: usize, seed: u64) -> Self {
        TrafficConfig { arrivals, seed }
    }

    #[inline]
    pub const fn arrivals(self) -> usize {
        self.arrivals
    }

    #[inline]
    pub const fn seed(self) -> u64 {
        self.seed
    }
}

impl Default for TrafficConfig {
    #[inline]
    fn default() -> Self {
        TrafficConfig {
            arrivals: 12,
            seed: 42,
        }
    }
}

impl Display for TrafficConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TrafficConfig {{ arrivals: {}, seed: {} }}",
            self.arrivals, self.seed
        )
    }
}

/// Generate `config.arrivals()` claims from the seeded RNG.
pub fn generate_traffic(config: &TrafficConfig) -> Vec<ClaimRequest> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed());
    (0..config.arrivals())
        .map(|_| {
            let tenant = *TENANT_NAMES
                .choose(&mut rng)
                .expect("tenant name pool is non-empty");
            ClaimRequest::new(tenant, random_plate(&mut rng))
        })
        .collect()
}

fn random_plate(rng: &mut ChaCha8Rng) -> PlateKey {
    let letters: String = (0..3)
        .map(|_| char::from(b'A' + rng.gen_range(0..26u8)))
        .collect();
    let digits: u16 = rng.gen_range(100..=999);
    PlateKey::new(format!("{}-{}", letters, digits)).expect("generated plate is non-empty")
}
