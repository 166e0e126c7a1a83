//! Telemetry observation type.

use serde::{Deserialize, Serialize};

/// One telemetry reading: a timestamp and a value.
///
/// Timestamps are opaque ordered keys (epoch seconds in practice). Streams
/// must be fed in non-decreasing timestamp order; that is a precondition of
/// the windowing layer, not something enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: i64,
    pub value: f64,
}

impl Observation {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}
