//! Online Evaluation Service Provider Interface
//!
//! Defines types for comparing windowed online detection against a batch
//! ground truth.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{EvaluationError, Result};
pub use model::{EvaluationReport, GroundTruth, Scoring, TrialOutcome};
