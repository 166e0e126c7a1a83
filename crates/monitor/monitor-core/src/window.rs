//! Fixed-capacity sliding window over telemetry observations.

use std::collections::VecDeque;

use monitor_api::WindowConfig;
use monitor_spi::Observation;

/// Fixed-capacity trailing buffer of recent observations.
///
/// Appends are O(1); once the buffer is full the oldest entry is evicted,
/// so memory per series is bounded by the capacity chosen at construction.
/// Entries are kept in insertion order, which callers must keep equal to
/// chronological order (streams are fed in non-decreasing timestamp order;
/// that precondition is not enforced here).
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    buffer: VecDeque<Observation>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create a window with the given capacity.
    ///
    /// A capacity of 0 is clamped to 1; the window always holds at least
    /// the latest observation.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Create from configuration.
    pub fn from_config(config: &WindowConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Append one observation, evicting the oldest on overflow.
    pub fn push(&mut self, observation: Observation) {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(observation);
    }

    /// Current contents, oldest first. Does not mutate the window;
    /// calling it twice without an intervening push yields equal results.
    pub fn snapshot(&self) -> Vec<Observation> {
        self.buffer.iter().copied().collect()
    }

    /// Position of the most recently pushed element within the snapshot,
    /// or `None` while the window is empty.
    pub fn latest_index(&self) -> Option<usize> {
        self.buffer.len().checked_sub(1)
    }

    /// Number of observations currently held.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the window holds no observations.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether the window has reached its capacity.
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// The immutable capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all contents, keeping the capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(t: i64) -> Observation {
        Observation::new(t, t as f64)
    }

    #[test]
    fn test_length_never_exceeds_capacity() {
        let mut window = SlidingWindow::new(4);
        for t in 0..20 {
            window.push(obs(t));
            assert!(window.len() <= 4);
        }
        assert!(window.is_full());
    }

    #[test]
    fn test_retains_exactly_last_w_in_order() {
        let mut window = SlidingWindow::new(3);
        for t in 0..10 {
            window.push(obs(t));
        }
        let timestamps: Vec<i64> = window.snapshot().iter().map(|o| o.timestamp).collect();
        assert_eq!(timestamps, vec![7, 8, 9]);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut window = SlidingWindow::new(5);
        for t in 0..7 {
            window.push(obs(t));
        }
        assert_eq!(window.snapshot(), window.snapshot());
    }

    #[test]
    fn test_latest_index_points_at_newest() {
        let mut window = SlidingWindow::new(3);
        assert_eq!(window.latest_index(), None);

        window.push(obs(1));
        assert_eq!(window.latest_index(), Some(0));

        for t in 2..=5 {
            window.push(obs(t));
        }
        let snapshot = window.snapshot();
        let latest = window.latest_index().unwrap();
        assert_eq!(snapshot[latest].timestamp, 5);
    }

    #[test]
    fn test_partial_fill() {
        let mut window = SlidingWindow::new(10);
        window.push(obs(1));
        window.push(obs(2));
        assert_eq!(window.len(), 2);
        assert!(!window.is_full());
        assert_eq!(window.snapshot().len(), 2);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut window = SlidingWindow::new(0);
        window.push(obs(1));
        window.push(obs(2));
        assert_eq!(window.len(), 1);
        assert_eq!(window.snapshot()[0].timestamp, 2);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut window = SlidingWindow::new(2);
        window.push(obs(1));
        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 2);
    }
}
