//! Windowed anomaly detection over a batch oracle.

use std::time::Instant;

use monitor_api::OracleConfig;
use monitor_spi::{BatchOracle, Observation, OracleError, Result, Verdict};

/// Runs a batch oracle over one window snapshot and reports on the
/// freshest point only.
///
/// Online detection only ever asserts about the newest observation:
/// interior flags in the window are the oracle re-litigating history and
/// are ignored. A window too short for the oracle's model downgrades to a
/// negative verdict rather than an error, with the elapsed time recorded
/// up to the failure point. Malformed-input errors propagate; they mean
/// the caller broke the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowedDetector;

impl WindowedDetector {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the window's most recent point.
    ///
    /// `elapsed` in the returned verdict is the wall-clock time of the
    /// oracle invocation; it is recorded for cost analysis and never feeds
    /// the detection decision.
    pub fn evaluate(
        &self,
        window: &[Observation],
        oracle: &dyn BatchOracle,
        config: &OracleConfig,
    ) -> Result<Verdict> {
        let timestamp = window.last().map(|o| o.timestamp).unwrap_or_default();

        let start = Instant::now();
        let outcome = oracle.detect(
            window,
            config.significance,
            config.max_anomaly_fraction,
            config.direction,
        );
        let elapsed = start.elapsed();

        match outcome {
            Ok(flagged) => Ok(Verdict::new(timestamp, flagged.contains(&timestamp), elapsed)),
            Err(OracleError::InsufficientData { required, got }) => {
                tracing::debug!(
                    required,
                    got,
                    timestamp,
                    "window too short for oracle, reporting no anomaly"
                );
                Ok(Verdict::negative(timestamp, elapsed))
            }
            Err(err) => Err(err),
        }
    }
}
