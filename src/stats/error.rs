//! Error types for statistical operations.

use thiserror::Error;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum StatsError {
    /// A normal-approximation precondition failed: both the expected
    /// successes `n·p` and failures `n·(1-p)` must reach `minimum`.
    #[error(
        "{context}: normal approximation requires n*p >= {minimum} and n*(1-p) >= {minimum}, \
         got successes = {successes}, failures = {failures}"
    )]
    Validation {
        context: String,
        successes: f64,
        failures: f64,
        minimum: f64,
    },

    /// An argument is outside the domain of the operation.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument { arg: &'static str, reason: String },

    /// Invalid parameter value for a distribution.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Probability value out of range [0, 1].
    #[error("Invalid probability {value}: must be in [0, 1]")]
    InvalidProbability { value: f64 },

    /// Input data is empty when non-empty data is required.
    #[error("Empty data in {context}")]
    EmptyData { context: String },

    /// Input data has insufficient length.
    #[error("Insufficient data in {context}: need {required} elements, got {got}")]
    InsufficientData {
        required: usize,
        got: usize,
        context: String,
    },

    /// Mismatched array lengths.
    #[error("Length mismatch in {context}: expected {expected}, got {got}")]
    LengthMismatch {
        expected: usize,
        got: usize,
        context: String,
    },

    /// Numerical computation failed.
    #[error("Numerical error: {message}")]
    NumericalError { message: String },
}

impl StatsError {
    pub(crate) fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
