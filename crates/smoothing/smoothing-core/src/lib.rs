//! Online Smoothing Core
//!
//! Implementations of incremental smoothing estimators and the scoring
//! entrypoint.

mod ewma;
mod scorer;
mod windowed_mean;

pub use ewma::{ewma_batch, EwmaSmoother};
pub use scorer::Scorer;
pub use windowed_mean::WindowedMeanSmoother;
