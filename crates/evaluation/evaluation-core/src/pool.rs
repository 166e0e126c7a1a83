//! Pool of telemetry series keyed by machine and sensor.

use std::collections::BTreeMap;

use monitor::{Observation, SeriesKey};

/// Owned collection of telemetry series, one per [`SeriesKey`].
///
/// Backed by an ordered map so iteration order is deterministic, which the
/// harness relies on for seeded sampling.
#[derive(Debug, Clone, Default)]
pub struct SeriesPool {
    series: BTreeMap<SeriesKey, Vec<Observation>>,
}

impl SeriesPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the series for `key`.
    ///
    /// Observations must already be in non-decreasing timestamp order;
    /// that is the streaming precondition, not something the pool sorts.
    pub fn insert(&mut self, key: SeriesKey, observations: Vec<Observation>) {
        self.series.insert(key, observations);
    }

    /// The series for `key`, if present.
    pub fn get(&self, key: &SeriesKey) -> Option<&[Observation]> {
        self.series.get(key).map(|s| s.as_slice())
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &SeriesKey> {
        self.series.keys()
    }

    /// Key/series pairs, in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SeriesKey, &[Observation])> {
        self.series.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of series held.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the pool holds no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Length of the longest series, or 0 when empty.
    pub fn longest(&self) -> usize {
        self.series.values().map(|s| s.len()).max().unwrap_or(0)
    }
}
