//! Smoothing error types.

pub mod smoothing_error;

pub use smoothing_error::{Result, SmoothingError};
