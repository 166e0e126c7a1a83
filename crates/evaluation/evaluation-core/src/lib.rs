//! Online Evaluation Core
//!
//! Implementation of the series pool, batch ground-truth generation, and
//! the sampled evaluation harness.

mod harness;
mod pool;

pub use harness::{ground_truth, smooth_series, EvaluationHarness};
pub use pool::SeriesPool;
