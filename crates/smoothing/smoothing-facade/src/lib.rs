//! Online Smoothing Facade
//!
//! Unified re-exports for the smoothing module:
//! - `Smoother` trait and error types from SPI
//! - Configuration types (`EwmaConfig`, `WindowedMeanConfig`, `ScoreRequest`)
//!   from API
//! - Estimator implementations (`EwmaSmoother`, `WindowedMeanSmoother`),
//!   the batch reference (`ewma_batch`), and the `Scorer` entrypoint from Core

// Re-export everything from SPI
pub use smoothing_spi::*;

// Re-export everything from API
pub use smoothing_api::*;

// Re-export everything from Core
pub use smoothing_core::*;
