//! Online Evaluation API
//!
//! Configuration for the harness that compares windowed online detection
//! against full-history batch ground truth.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use evaluation_spi::{
    EvaluationError, EvaluationReport, GroundTruth, Result, Scoring, TrialOutcome,
};

/// Evaluation harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Trailing window length handed to the online detector (default: 100).
    pub window_size: usize,
    /// Number of independent sampled trials per run (default: 50).
    pub trials: usize,
    /// Probability of biasing a trial toward a known-anomalous timestamp
    /// (default: 0.5).
    pub anomaly_bias: f64,
    /// Finite retry bound for biased candidate sampling (default: 16).
    /// A trial that exhausts it is recorded as failed, never retried
    /// indefinitely.
    pub max_resample_attempts: usize,
    /// Center of mass for the EWMA smoothing applied before detection
    /// (default: 5.0).
    pub center_of_mass: f64,
    /// RNG seed; a fixed seed reproduces the full trial sequence
    /// (default: 0).
    pub seed: u64,
    /// Aggregate classification score to report (default: F1).
    pub scoring: Scoring,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            window_size: 100,
            trials: 50,
            anomaly_bias: 0.5,
            max_resample_attempts: 16,
            center_of_mass: 5.0,
            seed: 0,
            scoring: Scoring::F1,
        }
    }
}

impl HarnessConfig {
    pub fn new(window_size: usize, trials: usize) -> Self {
        Self {
            window_size,
            trials,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_anomaly_bias(mut self, anomaly_bias: f64) -> Self {
        self.anomaly_bias = anomaly_bias;
        self
    }
}
