//! Monitoring model types.

pub mod observation;
pub mod series_key;
pub mod verdict;

pub use observation::Observation;
pub use series_key::SeriesKey;
pub use verdict::{Direction, Verdict};
