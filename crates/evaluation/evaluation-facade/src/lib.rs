//! Online Evaluation Facade
//!
//! Unified re-exports for the evaluation module:
//! - Report, outcome, and error types from SPI
//! - `HarnessConfig` from API
//! - `SeriesPool`, `ground_truth`, and `EvaluationHarness` from Core

// Re-export everything from SPI
pub use evaluation_spi::*;

// Re-export everything from API
pub use evaluation_api::*;

// Re-export everything from Core
pub use evaluation_core::*;
