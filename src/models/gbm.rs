// src/models/gbm.rs
use super::model::PriceModel;
use crate::error::{validation::*, ForecastResult};

/// Geometric Brownian motion `dS = μS dt + σS dW`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> ForecastResult<Self> {
        validate_finite("mu", mu)?;
        validate_finite("sigma", sigma)?;
        validate_non_negative("sigma", sigma)?;
        Ok(Gbm { mu, sigma })
    }

    /// `S_{t+dt} = S_t * exp((μ - σ²/2)dt + σ√dt Z)`
    pub fn exact_step(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        s_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt
            + self.sigma * dt.sqrt() * normal_draw)
            .exp()
    }
}

impl PriceModel for Gbm {
    fn evolve(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        self.exact_step(s_t, dt, normal_draw)
    }
}
