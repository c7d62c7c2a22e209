// src/solvers/price_step.rs
//! One trading-day price update
//!
//! # Algorithm
//!
//! 1. Draw Z ~ N(0,1) from the caller's generator (one draw per step)
//! 2. Apply the exact GBM transition:
//!    ```text
//!    S' = S * exp((μ - σ²/2)Δt + σ√Δt * Z)
//!    ```
//! 3. Round to cents, half away from zero
//! 4. Clamp to the price floor: `max(floor, round(S', 2))`
//!
//! The clamp is silent. A single bad draw cannot push the price below the
//! floor, but a run of them can pin it there.

use crate::math_utils::round_to_decimals;
use crate::models::gbm::Gbm;
use crate::models::model::PriceModel;
use crate::rng::NormalVariateGenerator;
use rand::Rng;
use tracing::trace;

/// Lowest price a step may return
pub const DEFAULT_PRICE_FLOOR: f64 = 1.0;

/// Decimal places kept on every simulated price
pub const DEFAULT_PRICE_DECIMALS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStepSimulator {
    floor: f64,
    decimals: u32,
}

impl Default for PriceStepSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_FLOOR, DEFAULT_PRICE_DECIMALS)
    }
}

impl PriceStepSimulator {
    pub fn new(floor: f64, decimals: u32) -> Self {
        Self { floor, decimals }
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Advance `current_price` by one interval of length `dt`.
    pub fn step<R: Rng>(
        &self,
        current_price: f64,
        mu: f64,
        sigma: f64,
        dt: f64,
        generator: &mut NormalVariateGenerator<R>,
    ) -> f64 {
        let z = generator.next();
        self.step_with_draw(current_price, mu, sigma, dt, z)
    }

    /// Same transform as [`step`](Self::step) with a caller-supplied shock.
    pub fn step_with_draw(&self, current_price: f64, mu: f64, sigma: f64, dt: f64, z: f64) -> f64 {
        self.step_model(&Gbm { mu, sigma }, current_price, dt, z)
    }

    /// Advance under any [`PriceModel`], applying rounding and the floor.
    pub fn step_model<M: PriceModel>(&self, model: &M, current_price: f64, dt: f64, z: f64) -> f64 {
        let raw = model.evolve(current_price, dt, z);
        let rounded = round_to_decimals(raw, self.decimals);
        if rounded < self.floor {
            trace!(raw, floor = self.floor, "price clamped to floor");
        }
        rounded.max(self.floor)
    }
}
