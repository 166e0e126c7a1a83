//! Online Smoothing API
//!
//! Configuration types for smoothing estimators and the scoring entrypoint.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use smoothing_spi::{Result, Smoother, SmoothingError};

// ============================================================================
// Estimator Configuration
// ============================================================================

/// Exponentially weighted smoother configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EwmaConfig {
    /// Decay expressed as center of mass (default: 5.0).
    ///
    /// Larger values smooth over a longer effective history. The effective
    /// center of mass widens during the first `center_of_mass` observations
    /// and stabilizes afterwards.
    pub center_of_mass: f64,
}

impl Default for EwmaConfig {
    fn default() -> Self {
        Self { center_of_mass: 5.0 }
    }
}

impl EwmaConfig {
    pub fn new(center_of_mass: f64) -> Self {
        Self { center_of_mass }
    }
}

/// Truncated running-mean smoother configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowedMeanConfig {
    /// Maximum effective history length (default: 5).
    pub window: usize,
}

impl Default for WindowedMeanConfig {
    fn default() -> Self {
        Self { window: 5 }
    }
}

impl WindowedMeanConfig {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

// ============================================================================
// Scoring Request
// ============================================================================

/// Default effective window for the scoring entrypoint.
pub const DEFAULT_SCORE_WINDOW: usize = 5;

/// A single scoring request.
///
/// Typed replacement for the loose `{value, n}` payload the scoring
/// entrypoint historically accepted: named fields, documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// The new observation to fold into the running average.
    pub value: f64,
    /// Optional override of the effective window length
    /// (default: [`DEFAULT_SCORE_WINDOW`]).
    pub window: Option<usize>,
}

impl ScoreRequest {
    pub fn new(value: f64) -> Self {
        Self { value, window: None }
    }

    pub fn with_window(value: f64, window: usize) -> Self {
        Self {
            value,
            window: Some(window),
        }
    }

    /// Effective window for this request.
    pub fn effective_window(&self) -> usize {
        self.window.unwrap_or(DEFAULT_SCORE_WINDOW)
    }
}
