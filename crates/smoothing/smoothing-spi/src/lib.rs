//! Online Smoothing Service Provider Interface
//!
//! Defines traits and error types for incremental smoothing estimators.

pub mod contract;
pub mod error;

// Re-export all public items at crate root for convenience
pub use contract::Smoother;
pub use error::{Result, SmoothingError};
