//! Running mean truncated to a bounded effective window.

use smoothing_api::WindowedMeanConfig;
use smoothing_spi::{Result, Smoother, SmoothingError};

/// Running mean with a bounded effective window.
///
/// Welford's incremental mean, truncated so the divisor never exceeds the
/// configured window: `n_eff = min(count + 1, window)`, then
/// `avg += (value - avg) / n_eff`. During the first `window` observations
/// this is an exact cumulative mean; afterwards it behaves like an
/// exponential smoother with span `window`.
#[derive(Debug, Clone)]
pub struct WindowedMeanSmoother {
    window: usize,
    avg: f64,
    count: usize,
}

impl WindowedMeanSmoother {
    /// Create a new truncated running mean.
    ///
    /// # Arguments
    ///
    /// * `window` - Maximum effective history length, must be `>= 1`.
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(SmoothingError::InvalidParameter {
                name: "window".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            window,
            avg: 0.0,
            count: 0,
        })
    }

    /// Create from configuration.
    pub fn from_config(config: &WindowedMeanConfig) -> Result<Self> {
        Self::new(config.window)
    }

    /// Get the configured window length.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Smoother for WindowedMeanSmoother {
    fn update(&mut self, value: f64) -> f64 {
        let n_eff = (self.count + 1).min(self.window) as f64;
        self.avg += (value - self.avg) / n_eff;
        self.count += 1;
        self.avg
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then_some(self.avg)
    }

    fn count(&self) -> usize {
        self.count
    }

    fn reset(&mut self) {
        self.avg = 0.0;
        self.count = 0;
    }
}
