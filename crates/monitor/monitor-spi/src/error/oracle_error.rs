//! Oracle error types.

use thiserror::Error;

/// Errors raised by a batch anomaly oracle.
///
/// `InsufficientData` is a runtime condition, not a failure: a window too
/// short to fit the oracle's model means "no anomaly detected" and is
/// handled locally by the windowed detector. `InvalidInput` indicates a
/// contract violation by the caller (malformed series) and propagates.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl OracleError {
    /// Whether this error is a recoverable short-window condition.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, OracleError::InsufficientData { .. })
    }
}

/// Result type for oracle and detector operations.
pub type Result<T> = std::result::Result<T, OracleError>;
