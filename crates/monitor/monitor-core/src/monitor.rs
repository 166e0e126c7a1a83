//! Per-series streaming monitor.

use monitor_api::{OracleConfig, WindowConfig};
use monitor_spi::{BatchOracle, Observation, Result, SeriesKey, Verdict};
use smoothing::{EwmaSmoother, Smoother};

use crate::detector::WindowedDetector;
use crate::window::SlidingWindow;

/// Streaming anomaly monitor for one telemetry series.
///
/// Owns the full per-series pipeline state: the smoothing level and the
/// sliding window. Each observation is smoothed, appended to the window,
/// and, once the window is full, evaluated by the windowed detector.
/// State for different series never interacts; create one monitor per
/// [`SeriesKey`].
pub struct SeriesMonitor {
    key: SeriesKey,
    smoother: EwmaSmoother,
    window: SlidingWindow,
    detector: WindowedDetector,
}

impl SeriesMonitor {
    /// Create a monitor for `key` with the given smoother and window size.
    pub fn new(key: SeriesKey, smoother: EwmaSmoother, config: &WindowConfig) -> Self {
        Self {
            key,
            smoother,
            window: SlidingWindow::from_config(config),
            detector: WindowedDetector::new(),
        }
    }

    /// The series this monitor owns state for.
    pub fn key(&self) -> &SeriesKey {
        &self.key
    }

    /// Current window contents, oldest first.
    pub fn window(&self) -> Vec<Observation> {
        self.window.snapshot()
    }

    /// Feed one raw observation through smoothing and windowed detection.
    ///
    /// Returns `None` until the window has filled; detection on a partial
    /// window would only re-litigate the warmup period. Afterwards returns
    /// the verdict for the (smoothed) newest point.
    pub fn observe(
        &mut self,
        observation: Observation,
        oracle: &dyn BatchOracle,
        config: &OracleConfig,
    ) -> Result<Option<Verdict>> {
        let smoothed = self.smoother.update(observation.value);
        self.window
            .push(Observation::new(observation.timestamp, smoothed));

        if !self.window.is_full() {
            return Ok(None);
        }

        let snapshot = self.window.snapshot();
        let verdict = self.detector.evaluate(&snapshot, oracle, config)?;
        if verdict.is_anomaly {
            tracing::debug!(
                series = %self.key,
                timestamp = verdict.timestamp,
                "anomaly flagged on latest observation"
            );
        }
        Ok(Some(verdict))
    }

    /// Drop all smoothing and window state, as for a brand-new series.
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.window.clear();
    }
}
