//! Incremental smoother trait definition.

/// Incremental smoothing estimator.
///
/// Implementations maintain a running estimate over a stream of values,
/// updated one observation at a time in O(1) time and space.
///
/// Non-finite inputs (NaN, ±infinity) are propagated through the update
/// arithmetic rather than rejected, so an online pass over a sequence
/// stays numerically identical to a batch pass over the same sequence.
pub trait Smoother: Send {
    /// Fold in one observation and return the new smoothed value.
    fn update(&mut self, value: f64) -> f64;

    /// Current smoothed value, or `None` before the first observation.
    fn value(&self) -> Option<f64>;

    /// Number of observations folded in so far.
    fn count(&self) -> usize;

    /// Discard all state, as if freshly constructed.
    fn reset(&mut self);
}
