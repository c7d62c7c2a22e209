// src/error.rs
use std::fmt;

/// Error types for the gbm-forecast library
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Invalid model parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid engine configuration
    InvalidConfiguration { field: String, reason: String },

    /// Rejected user input (ticker, percentages, ...)
    InvalidInput { field: String, reason: String },

    /// Unparseable or out-of-range calendar date
    InvalidDate { input: String, reason: String },

    /// Failure while writing rendered output
    Output(String),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            ForecastError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            ForecastError::InvalidInput { field, reason } => {
                write!(f, "Invalid input for '{}': {}", field, reason)
            }
            ForecastError::InvalidDate { input, reason } => {
                write!(f, "Invalid date '{}': {}", input, reason)
            }
            ForecastError::Output(reason) => write!(f, "Failed to write output: {}", reason),
        }
    }
}

impl std::error::Error for ForecastError {}

impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        ForecastError::Output(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::Output(err.to_string())
    }
}

/// Result type alias for gbm-forecast operations
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Validation utilities
pub mod validation {
    use super::{ForecastError, ForecastResult};

    /// Largest forecast horizon accepted by [`validate_days`]
    pub const MAX_FORECAST_DAYS: usize = 10_000;

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> ForecastResult<()> {
        if value.is_nan() || value <= 0.0 {
            Err(ForecastError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> ForecastResult<()> {
        if value.is_nan() || value < 0.0 {
            Err(ForecastError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> ForecastResult<()> {
        if !value.is_finite() {
            Err(ForecastError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate forecast horizon
    pub fn validate_days(days: usize) -> ForecastResult<()> {
        if days == 0 {
            Err(ForecastError::InvalidConfiguration {
                field: "days".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if days > MAX_FORECAST_DAYS {
            Err(ForecastError::InvalidConfiguration {
                field: "days".to_string(),
                reason: format!("exceeds maximum allowed ({})", MAX_FORECAST_DAYS),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("initial_price", 200.0).is_ok());
        assert!(validate_positive("initial_price", 0.0).is_err());
        assert!(validate_positive("initial_price", -1.0).is_err());
        assert!(validate_positive("initial_price", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("annual_volatility", 0.0).is_ok());
        assert!(validate_non_negative("annual_volatility", 0.45).is_ok());
        assert!(validate_non_negative("annual_volatility", -0.01).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("annual_drift", -0.3).is_ok());
        assert!(validate_finite("annual_drift", f64::NAN).is_err());
        assert!(validate_finite("annual_drift", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_days() {
        assert!(validate_days(30).is_ok());
        assert!(validate_days(0).is_err());
        assert!(validate_days(MAX_FORECAST_DAYS + 1).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = ForecastError::InvalidParameters {
            parameter: "initial_price".to_string(),
            value: -5.0,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("initial_price"));
        assert!(display.contains("-5"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_io_error_converts_to_output() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ForecastError = io.into();
        assert!(matches!(err, ForecastError::Output(ref msg) if msg.contains("pipe closed")));
    }
}
