// src/analytics/gbm_analytic.rs
//! Closed-form lognormal statistics of the GBM price
//!
//! # Mathematical Foundation
//!
//! Under `dS_t = μ S_t dt + σ S_t dW_t` the terminal price is lognormal:
//! ```text
//! ln(S_t / S_0) ~ N((μ - σ²/2)t, σ²t)
//! ```
//!
//! so the mean, median and any quantile are available without simulation.
//! The forecast renderer uses these to show where a simulated path sits
//! relative to the distribution it was drawn from. The 2-decimal rounding
//! and the price floor applied by the step simulator are not reflected here.

use crate::error::{validation::*, ForecastError, ForecastResult};
use statrs::distribution::{ContinuousCDF, Normal};

/// Expected price `E[S_t] = S_0 * e^(μt)`
pub fn expected_price(s0: f64, mu: f64, t: f64) -> f64 {
    s0 * (mu * t).exp()
}

/// Median price `S_0 * e^((μ - σ²/2)t)`
pub fn median_price(s0: f64, mu: f64, sigma: f64, t: f64) -> f64 {
    s0 * ((mu - 0.5 * sigma * sigma) * t).exp()
}

/// Price below which the GBM finishes with probability `p`
///
/// # Formula
/// ```text
/// q_p = S_0 * exp((μ - σ²/2)t + σ√t * Φ⁻¹(p))
/// ```
pub fn price_quantile(s0: f64, mu: f64, sigma: f64, t: f64, p: f64) -> ForecastResult<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(ForecastError::InvalidParameters {
            parameter: "p".to_string(),
            value: p,
            constraint: "must be in the open interval (0, 1)".to_string(),
        });
    }
    validate_positive("s0", s0)?;
    validate_non_negative("sigma", sigma)?;
    validate_non_negative("t", t)?;

    let standard = Normal::new(0.0, 1.0).map_err(|e| ForecastError::InvalidParameters {
        parameter: "standard_normal".to_string(),
        value: 1.0,
        constraint: e.to_string(),
    })?;
    let z = standard.inverse_cdf(p);

    Ok(median_price(s0, mu, sigma, t) * (sigma * t.sqrt() * z).exp())
}

/// Central interval holding `level` of the probability mass, e.g. 0.9
pub fn confidence_band(s0: f64, mu: f64, sigma: f64, t: f64, level: f64) -> ForecastResult<(f64, f64)> {
    if !(level > 0.0 && level < 1.0) {
        return Err(ForecastError::InvalidParameters {
            parameter: "level".to_string(),
            value: level,
            constraint: "must be in the open interval (0, 1)".to_string(),
        });
    }
    let tail = 0.5 * (1.0 - level);
    let lower = price_quantile(s0, mu, sigma, t, tail)?;
    let upper = price_quantile(s0, mu, sigma, t, 1.0 - tail)?;
    Ok((lower, upper))
}

/// One band per trading day, day `i` sitting at `t = (i + 1) * dt`
pub fn daily_confidence_bands(
    s0: f64,
    mu: f64,
    sigma: f64,
    dt: f64,
    days: usize,
    level: f64,
) -> ForecastResult<Vec<(f64, f64)>> {
    (1..=days)
        .map(|i| confidence_band(s0, mu, sigma, i as f64 * dt, level))
        .collect()
}
