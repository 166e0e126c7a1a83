//! Windowed Anomaly Monitoring API
//!
//! Configuration types for sliding windows and oracle invocation.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use monitor_spi::{BatchOracle, Direction, Observation, OracleError, Result, SeriesKey, Verdict};

// ============================================================================
// Window Configuration
// ============================================================================

/// Sliding window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Fixed window capacity (default: 100). Immutable once the window is
    /// constructed; memory is bounded by this many observations per series.
    pub capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

impl WindowConfig {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

// ============================================================================
// Oracle Configuration
// ============================================================================

/// Parameters forwarded to the batch oracle on every invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Two-sided significance level for flagging (default: 0.05).
    pub significance: f64,
    /// Upper bound on the fraction of points flagged (default: 0.1).
    pub max_anomaly_fraction: f64,
    /// Which side of the expected band counts as anomalous (default: both).
    pub direction: Direction,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            significance: 0.05,
            max_anomaly_fraction: 0.1,
            direction: Direction::Both,
        }
    }
}

impl OracleConfig {
    pub fn new(significance: f64, max_anomaly_fraction: f64, direction: Direction) -> Self {
        Self {
            significance,
            max_anomaly_fraction,
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_default() {
        assert_eq!(WindowConfig::default().capacity, 100);
    }

    #[test]
    fn test_oracle_config_default() {
        let config = OracleConfig::default();
        assert_eq!(config.significance, 0.05);
        assert_eq!(config.max_anomaly_fraction, 0.1);
        assert_eq!(config.direction, Direction::Both);
    }
}
