//! Random event source for obstacle spawns
//!
//! The simulation never touches a global RNG. Spawn positions and hues come
//! through this one-method trait so tests can script exact values.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform floats in [0, 1)
pub trait SpawnRng {
    fn next_unit(&mut self) -> f32;
}

/// Production source: PCG32, seeded once per run
#[derive(Debug, Clone)]
pub struct PcgSpawnRng {
    rng: Pcg32,
}

impl PcgSpawnRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl SpawnRng for PcgSpawnRng {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Scripted source for tests: yields the given values in order, then cycles.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<f32>,
    index: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, index: 0 }
    }
}

impl SpawnRng for SequenceRng {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        v
    }
}
