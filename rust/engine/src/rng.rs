//! Randomness sources consumed by shuffling.
//!
//! The engine never seeds anything itself: callers hand in a [`RandomSource`],
//! which makes every shuffle reproducible given the same source trace.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Uniform integer source used by [`crate::shuffle::Shuffler`] implementations.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `low..=high_inclusive`.
    fn next_int(&mut self, low: usize, high_inclusive: usize) -> usize;
}

/// ChaCha20-backed source seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Picks a fresh seed; the chosen value is still available via [`Self::seed`].
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, low: usize, high_inclusive: usize) -> usize {
        if low >= high_inclusive {
            return low;
        }
        self.rng.random_range(low..=high_inclusive)
    }
}
