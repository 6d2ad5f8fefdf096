//! Error types for non-stationarity analysis
//!
//! Provides a unified error type for all nnst crates.

use thiserror::Error;

/// Core error type for non-stationarity analysis
#[derive(Error, Debug)]
pub enum Error {
    /// Analysis parameters are invalid or mutually inconsistent
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} {unit}, got {actual}")]
    InsufficientData {
        expected: usize,
        actual: usize,
        unit: &'static str,
    },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
            unit: "samples",
        }
    }

    /// Create an error for too few usable segments
    pub fn insufficient_segments(actual: usize) -> Self {
        Self::InsufficientData {
            expected: 2,
            actual,
            unit: "segments",
        }
    }

    /// Create an error for an unsupported confidence level
    pub fn invalid_confidence(percent: u32) -> Self {
        Self::Configuration(format!(
            "Confidence level {percent}% is not supported (expected one of 90, 95, 98, 99)"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// True for configuration errors
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// True for insufficient-data errors
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }

    /// True for computation errors
    pub fn is_computation(&self) -> bool {
        matches!(self, Self::Computation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Configuration("overlap must be in [0, 1)".to_string());
        assert_eq!(err.to_string(), "Configuration error: overlap must be in [0, 1)");

        let err = Error::InvalidInput("signal contains NaN".to_string());
        assert_eq!(err.to_string(), "Invalid input: signal contains NaN");

        let err = Error::insufficient_segments(1);
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 segments, got 1"
        );

        let err = Error::Computation("negative run variance".to_string());
        assert_eq!(err.to_string(), "Computation error: negative run variance");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_input() {
            Error::InsufficientData { expected, actual, unit } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
                assert_eq!(unit, "samples");
            }
            other => panic!("Wrong error type: {other:?}"),
        }

        let err = Error::invalid_confidence(80);
        assert!(err.is_configuration());
        assert!(err.to_string().contains("80%"));

        let err = Error::non_finite("expected run count");
        assert!(err.is_computation());
        assert_eq!(
            err.to_string(),
            "Computation error: expected run count contains NaN or infinite values"
        );
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        assert!(Error::insufficient_segments(0).is_insufficient_data());
        assert!(!Error::insufficient_segments(0).is_configuration());
        assert!(!Error::Computation(String::new()).is_insufficient_data());
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom error message")),
            other => panic!("Wrong error type: {other:?}"),
        }
    }
}
