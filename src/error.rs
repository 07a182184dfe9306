//! Error types for Enjambre operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Enjambre operations.
///
/// Configuration problems are reported before any fitness evaluation runs,
/// with enough context to correct the offending parameter.
///
/// # Examples
///
/// ```
/// use enjambre::error::EnjambreError;
///
/// let err = EnjambreError::InvalidHyperparameter {
///     param: "informants".to_string(),
///     value: "12".to_string(),
///     constraint: "<= swarm_size (8)".to_string(),
/// };
/// assert!(err.to_string().contains("Invalid hyperparameter"));
/// ```
#[derive(Debug)]
pub enum EnjambreError {
    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Search-space bound arrays don't match the expected dimensionality.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for EnjambreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnjambreError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            EnjambreError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Search space dimension mismatch: expected {expected}, got {actual}"
                )
            }
            EnjambreError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EnjambreError {}

impl From<&str> for EnjambreError {
    fn from(msg: &str) -> Self {
        EnjambreError::Other(msg.to_string())
    }
}

impl From<String> for EnjambreError {
    fn from(msg: String) -> Self {
        EnjambreError::Other(msg)
    }
}

impl EnjambreError {
    /// Create an invalid hyperparameter error with descriptive context.
    #[must_use]
    pub fn invalid_hyperparameter(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error.
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, EnjambreError>;
