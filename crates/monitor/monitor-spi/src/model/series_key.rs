//! Series identity type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one telemetry series: a machine and one of its sensors.
///
/// All pipeline state (smoothing level, window contents) is partitioned by
/// this key; series under different keys never interact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeriesKey {
    pub machine: String,
    pub sensor: String,
}

impl SeriesKey {
    pub fn new(machine: impl Into<String>, sensor: impl Into<String>) -> Self {
        Self {
            machine: machine.into(),
            sensor: sensor.into(),
        }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.machine, self.sensor)
    }
}
