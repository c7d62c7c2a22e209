// src/forecast/forecast_engine.rs
use crate::calendar::advance_one_trading_day;
use crate::error::{validation::*, ForecastError, ForecastResult};
use crate::forecast::path::{ForecastPath, ForecastStep};
use crate::rng::NormalVariateGenerator;
use crate::solvers::price_step::{PriceStepSimulator, DEFAULT_PRICE_DECIMALS, DEFAULT_PRICE_FLOOR};
use chrono::{Local, NaiveDate};
use rand::Rng;
use tracing::{debug, info};

/// Forecast horizon used when none is configured
pub const DEFAULT_FORECAST_DAYS: usize = 30;

/// Annualisation constant: `dt = 1 / TRADING_DAYS_PER_YEAR`
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Per-run model inputs, as decimal fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    pub initial_price: f64,
    pub annual_drift: f64,
    pub annual_volatility: f64,
}

impl ModelParameters {
    pub fn new(initial_price: f64, annual_drift: f64, annual_volatility: f64) -> ForecastResult<Self> {
        let params = ModelParameters {
            initial_price,
            annual_drift,
            annual_volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Build from percentages as typed by a user, e.g. `(200.0, 15.0, 45.0)`.
    pub fn from_percentages(
        initial_price: f64,
        annual_return_pct: f64,
        annual_volatility_pct: f64,
    ) -> ForecastResult<Self> {
        Self::new(
            initial_price,
            annual_return_pct / 100.0,
            annual_volatility_pct / 100.0,
        )
    }

    pub fn validate(&self) -> ForecastResult<()> {
        validate_finite("initial_price", self.initial_price)?;
        validate_positive("initial_price", self.initial_price)?;
        validate_finite("annual_drift", self.annual_drift)?;
        validate_finite("annual_volatility", self.annual_volatility)?;
        validate_non_negative("annual_volatility", self.annual_volatility)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    pub days: usize,
    pub trading_days_per_year: f64,
    pub price_floor: f64,
    pub price_decimals: u32,
}

impl ForecastConfig {
    pub fn validate(&self) -> ForecastResult<()> {
        validate_days(self.days)?;
        if !self.trading_days_per_year.is_finite() || self.trading_days_per_year <= 0.0 {
            return Err(ForecastError::InvalidConfiguration {
                field: "trading_days_per_year".to_string(),
                reason: format!("must be finite and positive, got {}", self.trading_days_per_year),
            });
        }
        validate_finite("price_floor", self.price_floor)?;
        validate_positive("price_floor", self.price_floor)?;
        Ok(())
    }

    /// Length of one trading day as a fraction of a year
    pub fn dt(&self) -> f64 {
        1.0 / self.trading_days_per_year
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        ForecastConfig {
            days: DEFAULT_FORECAST_DAYS,
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
            price_floor: DEFAULT_PRICE_FLOOR,
            price_decimals: DEFAULT_PRICE_DECIMALS,
        }
    }
}

/// Single-path GBM forecaster over weekend-skipping trading days
///
/// # Algorithm
///
/// ```text
/// cursor = start_date, S = S₀
/// repeat `days` times:
///     cursor = next trading day after cursor
///     S      = max(floor, round(S * exp((μ - σ²/2)Δt + σ√Δt Z), 2))
///     emit (cursor, S)
/// ```
///
/// The iteration count is fixed; only prices are stochastic.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    config: ForecastConfig,
    stepper: PriceStepSimulator,
}

impl ForecastEngine {
    pub fn new(config: ForecastConfig) -> ForecastResult<Self> {
        config.validate()?;
        let stepper = PriceStepSimulator::new(config.price_floor, config.price_decimals);
        Ok(Self { config, stepper })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Simulate `config.days` trading days strictly after `start_date`.
    pub fn generate<R: Rng>(
        &self,
        params: &ModelParameters,
        label: &str,
        start_date: NaiveDate,
        generator: &mut NormalVariateGenerator<R>,
    ) -> ForecastPath {
        let mu = params.annual_drift;
        let sigma = params.annual_volatility;
        let dt = self.config.dt();

        debug!(
            label,
            initial_price = params.initial_price,
            mu,
            sigma,
            days = self.config.days,
            %start_date,
            "generating forecast"
        );

        let mut current_price = params.initial_price;
        let mut cursor = start_date;
        let mut steps = Vec::with_capacity(self.config.days);

        for _ in 0..self.config.days {
            cursor = advance_one_trading_day(cursor);
            current_price = self.stepper.step(current_price, mu, sigma, dt, generator);
            steps.push(ForecastStep {
                date: cursor,
                price: current_price,
            });
        }

        let path = ForecastPath {
            label: label.to_string(),
            initial_price: params.initial_price,
            steps,
        };

        info!(
            label,
            days = path.len(),
            final_price = path.final_price().unwrap_or(params.initial_price),
            floored_days = path.floored_days(self.stepper.floor()),
            "forecast complete"
        );

        path
    }

    /// [`generate`](Self::generate) starting from the local wall-clock date.
    pub fn generate_from_today<R: Rng>(
        &self,
        params: &ModelParameters,
        label: &str,
        generator: &mut NormalVariateGenerator<R>,
    ) -> ForecastPath {
        self.generate(params, label, Local::now().date_naive(), generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::is_trading_day;
    use crate::math_utils::round_to_decimals;

    fn start() -> NaiveDate {
        // Thursday
        NaiveDate::from_ymd_opt(2024, 6, 13).unwrap()
    }

    #[test]
    fn test_default_config() {
        let cfg = ForecastConfig::default();
        assert_eq!(cfg.days, 30);
        assert_eq!(cfg.dt(), 1.0 / 252.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cfg = ForecastConfig {
            days: 0,
            ..Default::default()
        };
        assert!(ForecastEngine::new(cfg).is_err());

        let cfg = ForecastConfig {
            trading_days_per_year: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            ForecastEngine::new(cfg),
            Err(ForecastError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_model_parameters_validation() {
        assert!(ModelParameters::new(200.0, 0.15, 0.45).is_ok());
        assert!(ModelParameters::new(0.0, 0.15, 0.45).is_err());
        assert!(ModelParameters::new(200.0, f64::NAN, 0.45).is_err());
        assert!(ModelParameters::new(200.0, 0.15, -0.1).is_err());

        let p = ModelParameters::from_percentages(200.0, 15.0, 45.0).unwrap();
        assert_eq!(p.annual_drift, 0.15);
        assert_eq!(p.annual_volatility, 0.45);
    }

    #[test]
    fn test_path_length_and_dates() {
        let engine = ForecastEngine::new(ForecastConfig::default()).unwrap();
        let params = ModelParameters::new(200.0, 0.15, 0.45).unwrap();
        let mut gen = NormalVariateGenerator::from_seed(1);

        let path = engine.generate(&params, "TSLA", start(), &mut gen);

        assert_eq!(path.len(), 30);
        assert_eq!(path.label, "TSLA");
        assert_eq!(path.initial_price, 200.0);
        assert_eq!(path.steps[0].date, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
        assert_eq!(path.steps[1].date, NaiveDate::from_ymd_opt(2024, 6, 17).unwrap());
        for pair in path.steps.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        assert!(path.steps.iter().all(|s| is_trading_day(s.date)));
    }

    #[test]
    fn test_zero_volatility_path_is_deterministic() {
        let engine = ForecastEngine::new(ForecastConfig {
            days: 5,
            ..Default::default()
        })
        .unwrap();
        let params = ModelParameters::new(100.0, 0.252, 0.0).unwrap();
        let mut gen = NormalVariateGenerator::from_seed(3);

        let path = engine.generate(&params, "FLAT", start(), &mut gen);

        let mut expected = 100.0;
        for step in &path.steps {
            expected = round_to_decimals(expected * (0.252 * (1.0 / 252.0_f64)).exp(), 2);
            assert_eq!(step.price, expected);
        }
    }

    #[test]
    fn test_seeded_runs_match() {
        let engine = ForecastEngine::new(ForecastConfig::default()).unwrap();
        let params = ModelParameters::new(200.0, 0.15, 0.45).unwrap();

        let a = engine.generate(&params, "TSLA", start(), &mut NormalVariateGenerator::from_seed(99));
        let b = engine.generate(&params, "TSLA", start(), &mut NormalVariateGenerator::from_seed(99));

        assert_eq!(a, b);
    }
}
