//! # gbm-forecast: Single-Path GBM Price Forecasts
//!
//! Simulates one trading-day price path under geometric Brownian motion and
//! renders it next to mocked descriptive data for the ticker.
//!
//! ## Key Features
//!
//! - **Box-Muller normals**: two variates per uniform pair, spare cached per generator
//! - **Exact GBM step**: no discretisation bias; prices rounded to cents and floored at 1.0
//! - **Trading calendar**: weekends skipped, dates strictly increasing
//! - **Reproducible**: seeded generators give byte-identical paths
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use gbm_forecast::forecast::forecast_engine::{ForecastConfig, ForecastEngine, ModelParameters};
//! use gbm_forecast::rng::NormalVariateGenerator;
//!
//! let engine = ForecastEngine::new(ForecastConfig::default()).expect("Valid configuration");
//! let params = ModelParameters::from_percentages(200.0, 15.0, 45.0).expect("Valid parameters");
//! let start = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
//! let mut generator = NormalVariateGenerator::from_seed(42);
//!
//! let path = engine.generate(&params, "TSLA", start, &mut generator);
//! assert_eq!(path.len(), 30);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Each trading day advances the price by the exact GBM transition
//! ```text
//! S_{t+Δt} = S_t * exp((μ - σ²/2)Δt + σ√Δt * Z),   Z ~ N(0,1),   Δt = 1/252
//! ```

// Module declarations
pub mod analytics;
pub mod calendar;
pub mod error;
pub mod forecast;
pub mod fundamentals;
pub mod input;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod rng;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{ForecastError, ForecastResult};
pub use forecast::forecast_engine::{ForecastConfig, ForecastEngine, ModelParameters};
pub use forecast::path::{ForecastPath, ForecastStep};
pub use rng::NormalVariateGenerator;
