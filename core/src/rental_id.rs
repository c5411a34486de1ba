//! Rental codes: four random digits followed by three random uppercase
//! letters (`4821QXT`).
//!
//! Codes are drawn from a seedable RNG and redrawn while they collide with an
//! active rental, so two active rentals never share a code.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use rentr_common::fleet::ids::RentalId;

const DIGITS: usize = 4;
const LETTERS: usize = 3;

#[derive(Debug, Clone)]
pub struct RentalIdGenerator {
    rng: StdRng,
}

impl RentalIdGenerator {
    /// Generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator, mostly useful for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a code without any uniqueness check.
    pub fn next_id(&mut self) -> RentalId {
        let mut code = String::with_capacity(DIGITS + LETTERS);
        for _ in 0..DIGITS {
            code.push(char::from(b'0' + self.rng.random_range(0..10u8)));
        }
        for _ in 0..LETTERS {
            code.push(char::from(b'A' + self.rng.random_range(0..26u8)));
        }
        RentalId::new(code)
    }

    /// Draws codes until `is_taken` rejects none of them.
    pub fn next_unique<F>(&mut self, is_taken: F) -> RentalId
    where
        F: Fn(&RentalId) -> bool,
    {
        loop {
            let id = self.next_id();
            if !is_taken(&id) {
                return id;
            }
            trace!("rental id {id} already active, drawing again");
        }
    }
}

impl Default for RentalIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
