//! Windowed Anomaly Monitoring Service Provider Interface
//!
//! Defines traits and types for sliding-window anomaly detection over
//! machine telemetry.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::BatchOracle;
pub use error::{OracleError, Result};
pub use model::{Direction, Observation, SeriesKey, Verdict};
