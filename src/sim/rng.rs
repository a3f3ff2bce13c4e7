//! Injected randomness
//!
//! Shuffle and placement draw through `RandomSource` rather than a global
//! generator. Any `rand::Rng` qualifies; seeded `Pcg32` is the default so a
//! round can be replayed from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Uniform draws needed by the shuffler and placer
pub trait RandomSource {
    /// Uniform index in `[low, high)`; requires `low < high`
    fn index_in(&mut self, low: usize, high: usize) -> usize;

    /// Uniform float in `[low, high]`; requires `low <= high`, both finite
    fn float_in(&mut self, low: f32, high: f32) -> f32;
}

impl<R: Rng> RandomSource for R {
    fn index_in(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..high)
    }

    fn float_in(&mut self, low: f32, high: f32) -> f32 {
        // Rounding in the sampler must not escape the range
        self.random_range(low..=high).clamp(low, high)
    }
}

/// Seed record for reproducing a session's random stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}
