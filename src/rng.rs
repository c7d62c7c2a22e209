// src/rng.rs
//! Standard-normal variate generation for single-path forecasts
//!
//! # Box-Muller Transform
//!
//! Converts two uniform random variables into two independent normals:
//! ```text
//! Z₀ = √(-2ln(U)) * cos(2πV)
//! Z₁ = √(-2ln(U)) * sin(2πV)
//! ```
//! where U, V ~ Uniform(0,1) and Z₀, Z₁ ~ N(0,1).
//!
//! Each generation yields a pair; the second value is cached as the "spare"
//! and handed out on the following call, so two calls cost one pair of
//! uniforms and one logarithm.
//!
//! # Ownership
//!
//! The spare lives inside the generator instance, never in a global. Runs
//! that must be reproducible, or that execute on separate threads, each own
//! their own generator (see [`RngFactory`]).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Open01};
use std::f64::consts::PI;

/// Box-Muller normal generator with a cached spare draw
#[derive(Debug, Clone)]
pub struct NormalVariateGenerator<R = StdRng> {
    rng: R,
    spare: Option<f64>,
}

impl<R: Rng> NormalVariateGenerator<R> {
    /// Wrap an arbitrary uniform source. The spare cache starts empty.
    pub fn new(rng: R) -> Self {
        Self { rng, spare: None }
    }

    /// Draw one N(0,1) sample.
    pub fn next(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }

        // Open01 excludes 0, so ln(u) is always finite.
        let u: f64 = Open01.sample(&mut self.rng);
        let v: f64 = Open01.sample(&mut self.rng);

        let mag = (-2.0 * u.ln()).sqrt();
        let angle = 2.0 * PI * v;
        self.spare = Some(mag * angle.sin());

        mag * angle.cos()
    }

    /// Whether the next call will be served from the cache
    pub fn has_spare(&self) -> bool {
        self.spare.is_some()
    }

    /// Drop any cached spare so the next call starts a fresh pair
    pub fn reset(&mut self) {
        self.spare = None;
    }
}

impl NormalVariateGenerator<StdRng> {
    /// Deterministic generator: identical seeds produce identical streams.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy, for interactive runs.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

/// Hands out independent, reproducible generators keyed by run id
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Create a generator for a specific forecast run
    pub fn generator(&self, run_id: u64) -> NormalVariateGenerator<StdRng> {
        NormalVariateGenerator::from_seed(self.base_seed.wrapping_add(run_id))
    }
}
