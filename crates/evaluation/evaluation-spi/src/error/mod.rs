//! Evaluation error types.

pub mod evaluation_error;

pub use evaluation_error::{EvaluationError, Result};
