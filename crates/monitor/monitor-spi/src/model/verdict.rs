//! Detection verdict and direction types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which side of the expected band counts as anomalous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Only unusually high values.
    Positive,
    /// Only unusually low values.
    Negative,
    /// Either side.
    Both,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Both
    }
}

/// Outcome of evaluating one window: whether its freshest point is
/// anomalous, and how long the oracle call took.
///
/// `elapsed` exists for cost and throughput analysis only; it never feeds
/// back into the detection decision. Verdicts are ephemeral and not
/// persisted anywhere in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub timestamp: i64,
    pub is_anomaly: bool,
    pub elapsed: Duration,
}

impl Verdict {
    pub fn new(timestamp: i64, is_anomaly: bool, elapsed: Duration) -> Self {
        Self {
            timestamp,
            is_anomaly,
            elapsed,
        }
    }

    /// Negative verdict, used when a window is too short for the oracle.
    pub fn negative(timestamp: i64, elapsed: Duration) -> Self {
        Self::new(timestamp, false, elapsed)
    }
}
