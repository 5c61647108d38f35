//! Rand-backed implementations of the domain [`Picker`].
//!
//! - [`RandomPicker`]: thread-local RNG, the production default
//! - [`SeededPicker`]: `StdRng` from a fixed seed, for reproducible draws

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use trivia_domain::Picker;

/// Uniform picker over the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform picker with a deterministic sequence
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Picker for SeededPicker {
    fn pick_index(&self, len: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len),
            // A panic elsewhere poisoned the lock; the RNG state is still usable
            Err(poisoned) => poisoned.into_inner().gen_range(0..len),
        }
    }
}
