//! Windowed Anomaly Monitoring Core
//!
//! Implementations of the sliding window, the windowed detector, the
//! per-series streaming monitor, and a reference batch oracle.

mod detector;
mod monitor;
mod oracle;
mod window;

pub use detector::WindowedDetector;
pub use monitor::SeriesMonitor;
pub use oracle::ResidualOracle;
pub use window::SlidingWindow;
