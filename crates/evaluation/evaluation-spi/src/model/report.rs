//! Evaluation report types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which aggregate classification score the report exposes as `score()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scoring {
    Precision,
    Recall,
    F1,
    /// Weighted F-score; `beta > 1` weights recall higher, `beta < 1`
    /// weights precision higher.
    FBeta(f64),
}

impl Default for Scoring {
    fn default() -> Self {
        Scoring::F1
    }
}

/// One evaluated trial: batch-truth label, online prediction, oracle time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub actual: bool,
    pub predicted: bool,
    pub elapsed: Duration,
}

impl TrialOutcome {
    pub fn new(actual: bool, predicted: bool, elapsed: Duration) -> Self {
        Self {
            actual,
            predicted,
            elapsed,
        }
    }
}

/// Aggregated classification quality and latency over one evaluation run.
///
/// Accumulated across trials and reset per run; derived metrics guard
/// against empty denominators by returning 0.0 rather than NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub scoring: Scoring,
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
    /// Total trials recorded, including failed ones.
    pub trials: usize,
    /// Trials that exhausted the resampling bound without finding a
    /// qualifying candidate; each is counted as a false negative.
    pub failed_trials: usize,
    pub mean_latency: Duration,
}

impl EvaluationReport {
    /// Create an empty report for one run.
    pub fn new(scoring: Scoring) -> Self {
        Self {
            scoring,
            true_positives: 0,
            false_positives: 0,
            true_negatives: 0,
            false_negatives: 0,
            trials: 0,
            failed_trials: 0,
            mean_latency: Duration::ZERO,
        }
    }

    /// Fold one trial outcome into the counts.
    pub fn record(&mut self, outcome: &TrialOutcome) {
        match (outcome.actual, outcome.predicted) {
            (true, true) => self.true_positives += 1,
            (false, true) => self.false_positives += 1,
            (false, false) => self.true_negatives += 1,
            (true, false) => self.false_negatives += 1,
        }
        self.trials += 1;
    }

    /// Record a trial that exhausted its resampling bound: zero-score
    /// direction (a false negative), tracked separately.
    pub fn record_failed(&mut self) {
        self.false_negatives += 1;
        self.failed_trials += 1;
        self.trials += 1;
    }

    /// Fraction of positive predictions that were correct.
    pub fn precision(&self) -> f64 {
        let denom = self.true_positives + self.false_positives;
        if denom == 0 {
            return 0.0;
        }
        self.true_positives as f64 / denom as f64
    }

    /// Fraction of actual anomalies that were predicted.
    pub fn recall(&self) -> f64 {
        let denom = self.true_positives + self.false_negatives;
        if denom == 0 {
            return 0.0;
        }
        self.true_positives as f64 / denom as f64
    }

    /// Harmonic mean of precision and recall.
    pub fn f1(&self) -> f64 {
        self.f_beta(1.0)
    }

    /// Weighted F-score.
    pub fn f_beta(&self, beta: f64) -> f64 {
        let p = self.precision();
        let r = self.recall();
        let b2 = beta * beta;
        let denom = b2 * p + r;
        if denom == 0.0 {
            return 0.0;
        }
        (1.0 + b2) * p * r / denom
    }

    /// The configured aggregate score.
    pub fn score(&self) -> f64 {
        match self.scoring {
            Scoring::Precision => self.precision(),
            Scoring::Recall => self.recall(),
            Scoring::F1 => self.f1(),
            Scoring::FBeta(beta) => self.f_beta(beta),
        }
    }

    /// Fraction of trials where prediction matched the batch label.
    pub fn accuracy(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (self.true_positives + self.true_negatives) as f64 / self.trials as f64
    }
}
