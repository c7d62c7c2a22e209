// src/input.rs
//! Raw user input for one forecast run and its validation
//!
//! Percentages arrive as typed (`15` for 15%) and are converted to decimal
//! fractions only after every field has been checked.

use crate::error::{ForecastError, ForecastResult};
use crate::forecast::forecast_engine::ModelParameters;

pub const DEFAULT_TICKER: &str = "TSLA";
pub const DEFAULT_INITIAL_PRICE: f64 = 200.0;
pub const DEFAULT_ANNUAL_RETURN_PCT: f64 = 15.0;
pub const DEFAULT_ANNUAL_VOLATILITY_PCT: f64 = 45.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub ticker: String,
    pub initial_price: f64,
    pub annual_return_pct: f64,
    pub annual_volatility_pct: f64,
}

impl Default for ForecastRequest {
    fn default() -> Self {
        ForecastRequest {
            ticker: DEFAULT_TICKER.to_string(),
            initial_price: DEFAULT_INITIAL_PRICE,
            annual_return_pct: DEFAULT_ANNUAL_RETURN_PCT,
            annual_volatility_pct: DEFAULT_ANNUAL_VOLATILITY_PCT,
        }
    }
}

impl ForecastRequest {
    /// Check every field and return the normalised ticker with model inputs.
    pub fn validate(&self) -> ForecastResult<(String, ModelParameters)> {
        if !self.initial_price.is_finite() || self.initial_price <= 0.0 {
            return Err(ForecastError::InvalidInput {
                field: "initial_price".to_string(),
                reason: "please enter a valid starting price greater than 0".to_string(),
            });
        }
        if !self.annual_return_pct.is_finite() || !self.annual_volatility_pct.is_finite() {
            return Err(ForecastError::InvalidInput {
                field: "annual_return/annual_volatility".to_string(),
                reason: "please enter valid numbers for annual return and volatility".to_string(),
            });
        }
        if self.annual_volatility_pct < 0.0 {
            return Err(ForecastError::InvalidInput {
                field: "annual_volatility".to_string(),
                reason: "volatility cannot be negative".to_string(),
            });
        }

        let ticker = normalise_ticker(&self.ticker);
        if ticker.is_empty() {
            return Err(ForecastError::InvalidInput {
                field: "ticker".to_string(),
                reason: "please enter a stock ticker symbol".to_string(),
            });
        }

        let params = ModelParameters::from_percentages(
            self.initial_price,
            self.annual_return_pct,
            self.annual_volatility_pct,
        )?;
        Ok((ticker, params))
    }
}

pub fn normalise_ticker(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_is_valid() {
        let (ticker, params) = ForecastRequest::default().validate().unwrap();
        assert_eq!(ticker, "TSLA");
        assert_eq!(params.initial_price, 200.0);
        assert_eq!(params.annual_drift, 0.15);
        assert_eq!(params.annual_volatility, 0.45);
    }

    #[test]
    fn test_ticker_is_normalised() {
        let req = ForecastRequest {
            ticker: "  googl ".to_string(),
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap().0, "GOOGL");
    }

    #[test]
    fn test_rejects_bad_price() {
        for price in [0.0, -10.0, f64::NAN] {
            let req = ForecastRequest {
                initial_price: price,
                ..Default::default()
            };
            assert!(matches!(
                req.validate(),
                Err(ForecastError::InvalidInput { ref field, .. }) if field == "initial_price"
            ));
        }
    }

    #[test]
    fn test_rejects_non_numeric_percentages() {
        let req = ForecastRequest {
            annual_return_pct: f64::NAN,
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_ticker() {
        let req = ForecastRequest {
            ticker: "   ".to_string(),
            ..Default::default()
        };
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("ticker"));
    }

    #[test]
    fn test_negative_return_allowed() {
        let req = ForecastRequest {
            annual_return_pct: -20.0,
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap().1.annual_drift, -0.2);
    }
}
