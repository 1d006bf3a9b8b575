//! RNG module - reproducible digit draws for board generation
//!
//! Wraps a ChaCha8 stream so a given seed always produces the same board.
//! Without a seed the stream is keyed from the wall clock.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{MAX_DIGIT, MIN_DIGIT};

/// Seeded digit generator used to fill boards
#[derive(Debug, Clone)]
pub struct BoardRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl BoardRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the current time
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        // Keep zero reserved for "unseeded".
        Self::new(nanos.max(1))
    }

    /// Use `seed` when it is set and non-zero, otherwise the clock
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) if s != 0 => Self::new(s),
            _ => Self::from_clock(),
        }
    }

    /// The seed this stream was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a live cell value in `[1, 9]`
    pub fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(MIN_DIGIT..=MAX_DIGIT)
    }
}
