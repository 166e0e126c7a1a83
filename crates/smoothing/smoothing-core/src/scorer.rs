//! Scoring entrypoint over the truncated running mean.

use smoothing_api::ScoreRequest;

/// Request/response scoring state for a single series.
///
/// This is the shape the smoothing estimator exposes when embedded behind
/// a request/response boundary: construction plays the role of `init`,
/// [`score`](Scorer::score) folds one request into the running average and
/// returns the smoothed value. The state is an explicit owned object, one
/// per series, rather than process-global; callers create it on the first
/// observation of a series and drop it with the session that owns it.
///
/// The effective window is a per-request parameter
/// (`ScoreRequest::window`, default 5), capping the divisor at
/// `min(count + 1, window)`.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    avg: f64,
    count: usize,
}

impl Scorer {
    /// Create a fresh scorer with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one request into the running average and return it.
    ///
    /// Non-finite request values propagate through the arithmetic.
    pub fn score(&mut self, request: &ScoreRequest) -> f64 {
        let n_eff = (self.count + 1).min(request.effective_window().max(1)) as f64;
        self.avg += (request.value - self.avg) / n_eff;
        self.count += 1;
        self.avg
    }

    /// Number of requests scored so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Discard all history, as `init` would.
    pub fn reset(&mut self) {
        self.avg = 0.0;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_with_default_window() {
        let mut scorer = Scorer::new();
        let inputs = [1.0, 2.0, 3.0, 2.0, 1.0];
        let expected = [1.0, 1.5, 2.0, 1.875, 1.7];

        for (input, want) in inputs.iter().zip(expected.iter()) {
            let got = scorer.score(&ScoreRequest::new(*input));
            assert!((got - want).abs() < 1e-12, "got {}, want {}", got, want);
        }
    }

    #[test]
    fn test_window_override_per_request() {
        let mut scorer = Scorer::new();
        scorer.score(&ScoreRequest::with_window(0.0, 2));
        scorer.score(&ScoreRequest::with_window(0.0, 2));
        // Third request with window 2: divisor stays at 2
        let got = scorer.score(&ScoreRequest::with_window(10.0, 2));
        assert_eq!(got, 5.0);
    }

    #[test]
    fn test_reset_behaves_like_init() {
        let mut scorer = Scorer::new();
        scorer.score(&ScoreRequest::new(100.0));
        scorer.reset();
        assert_eq!(scorer.count(), 0);
        assert_eq!(scorer.score(&ScoreRequest::new(7.0)), 7.0);
    }

    #[test]
    fn test_zero_window_request_clamped() {
        let mut scorer = Scorer::new();
        // A window of 0 in a request is clamped to 1 rather than dividing by 0.
        assert_eq!(scorer.score(&ScoreRequest::with_window(4.0, 0)), 4.0);
    }

    #[test]
    fn test_non_finite_value_propagates() {
        let mut scorer = Scorer::new();
        scorer.score(&ScoreRequest::new(1.0));
        assert!(scorer.score(&ScoreRequest::new(f64::NAN)).is_nan());
    }
}
