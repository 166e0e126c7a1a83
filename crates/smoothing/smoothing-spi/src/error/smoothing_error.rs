//! Smoothing error types.

use thiserror::Error;

/// Errors that can occur when constructing smoothing estimators.
///
/// Note that `update` itself never fails: non-finite observations are
/// propagated through the arithmetic by contract, not rejected.
#[derive(Debug, Error)]
pub enum SmoothingError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for smoothing operations.
pub type Result<T> = std::result::Result<T, SmoothingError>;
