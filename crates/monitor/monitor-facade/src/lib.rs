//! Windowed Anomaly Monitoring Facade
//!
//! Unified re-exports for the monitoring module:
//! - `BatchOracle` trait, models, and error types from SPI
//! - Configuration types (`WindowConfig`, `OracleConfig`) from API
//! - `SlidingWindow`, `WindowedDetector`, `SeriesMonitor`, and the
//!   reference `ResidualOracle` from Core

// Re-export everything from SPI
pub use monitor_spi::*;

// Re-export everything from API
pub use monitor_api::*;

// Re-export everything from Core
pub use monitor_core::*;
