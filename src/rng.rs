//! Random Number Generation for Path Simulation
//!
//! # Design
//!
//! Every simulation takes its generator as an explicit argument; there is no
//! process-wide random state. Reproducibility comes from seeding:
//! - A single path: seed one `StdRng` and pass it in.
//! - Many paths in parallel: `RngFactory` derives one generator per path from
//!   `(base_seed, path_id)`, so results do not depend on the thread count.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// RNG factory for reproducible parallel simulations
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Create an independent generator for a specific path
    pub fn create_std_rng(&self, path_id: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(path_id))
    }
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Draw `n` independent standard normal variates
pub fn normal_draws<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    (0..n).map(|_| get_normal_draw(rng)).collect()
}
