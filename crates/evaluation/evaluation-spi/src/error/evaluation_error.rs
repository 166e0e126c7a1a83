//! Evaluation error types.

use monitor_spi::OracleError;
use thiserror::Error;

/// Errors that can occur while running an evaluation.
///
/// Sampling exhaustion is deliberately NOT an error: a trial that cannot
/// find a qualifying anomaly timestamp within the retry bound is recorded
/// as a failed trial on the report, not raised.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Series pool is empty")]
    EmptyPool,

    #[error("Window of {window} does not fit any series (longest has {longest} points)")]
    WindowTooLarge { window: usize, longest: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Fatal oracle failure (malformed input); short-window conditions are
    /// absorbed by the windowed detector long before this level.
    #[error("Oracle failure: {0}")]
    Oracle(#[from] OracleError),
}

/// Result type for evaluation operations.
pub type Result<T> = std::result::Result<T, EvaluationError>;
