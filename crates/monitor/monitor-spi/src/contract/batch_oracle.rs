//! Batch oracle trait definition.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::model::{Direction, Observation};

/// Batch anomaly detection oracle.
///
/// The reference algorithm the online pipeline approximates: given an
/// ordered series, it returns the set of flagged timestamps in one pass.
/// Implementations are pure with respect to the series (same input, same
/// flags) and are expected to raise
/// [`OracleError::InsufficientData`](crate::OracleError::InsufficientData)
/// when the series is too short to fit their trend/seasonal model, and
/// [`OracleError::InvalidInput`](crate::OracleError::InvalidInput) when the
/// series violates the contract (e.g. unordered timestamps).
pub trait BatchOracle: Send + Sync {
    /// Detect anomalies over `series`.
    ///
    /// # Arguments
    ///
    /// * `series` - Observations in non-decreasing timestamp order
    /// * `significance` - Two-sided significance level for flagging
    /// * `max_anomaly_fraction` - Upper bound on the fraction of points flagged
    /// * `direction` - Which side of the expected band counts as anomalous
    fn detect(
        &self,
        series: &[Observation],
        significance: f64,
        max_anomaly_fraction: f64,
        direction: Direction,
    ) -> Result<BTreeSet<i64>>;
}
