//! Evaluation model types.

pub mod report;

use std::collections::{BTreeMap, BTreeSet};

use monitor_spi::SeriesKey;

pub use report::{EvaluationReport, Scoring, TrialOutcome};

/// Batch ground truth: for each series, the set of timestamps the
/// full-history oracle flags.
pub type GroundTruth = BTreeMap<SeriesKey, BTreeSet<i64>>;
