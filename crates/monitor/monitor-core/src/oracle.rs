//! Reference batch oracle: moving-average detrend + residual z-score.

use std::collections::BTreeSet;

use monitor_spi::{BatchOracle, Direction, Observation, OracleError, Result};

/// Reference batch anomaly oracle.
///
/// Detrends the series with a centered moving average, z-scores the
/// residuals, and flags points whose score exceeds the normal quantile at
/// the requested significance. The number of flags is capped at
/// `ceil(max_anomaly_fraction * n)`, keeping the strongest scores.
///
/// This is the in-repo stand-in for a production seasonal/trend oracle; it
/// honors the oracle contract, including the failure mode: a series
/// shorter than the trend span raises `InsufficientData`, which the
/// windowed detector downgrades locally.
#[derive(Debug, Clone)]
pub struct ResidualOracle {
    trend_window: usize,
}

impl ResidualOracle {
    /// Create an oracle with the given trend span (observations on each
    /// side of a point used for the moving-average trend).
    pub fn new(trend_window: usize) -> Self {
        Self {
            trend_window: trend_window.max(1),
        }
    }

    /// Minimum series length the oracle can fit.
    pub fn min_len(&self) -> usize {
        2 * self.trend_window + 1
    }

    fn trend(&self, values: &[f64]) -> Vec<f64> {
        let n = values.len();
        let half = self.trend_window;
        (0..n)
            .map(|i| {
                let start = i.saturating_sub(half);
                let end = (i + half + 1).min(n);
                values[start..end].iter().sum::<f64>() / (end - start) as f64
            })
            .collect()
    }
}

impl Default for ResidualOracle {
    fn default() -> Self {
        Self::new(7)
    }
}

impl BatchOracle for ResidualOracle {
    fn detect(
        &self,
        series: &[Observation],
        significance: f64,
        max_anomaly_fraction: f64,
        direction: Direction,
    ) -> Result<BTreeSet<i64>> {
        if !(0.0..1.0).contains(&significance) || significance == 0.0 {
            return Err(OracleError::InvalidInput(format!(
                "significance must be in (0, 1), got {}",
                significance
            )));
        }
        if series.windows(2).any(|w| w[1].timestamp < w[0].timestamp) {
            return Err(OracleError::InvalidInput(
                "timestamps must be non-decreasing".to_string(),
            ));
        }
        if series.len() < self.min_len() {
            return Err(OracleError::InsufficientData {
                required: self.min_len(),
                got: series.len(),
            });
        }

        let values: Vec<f64> = series.iter().map(|o| o.value).collect();
        let trend = self.trend(&values);
        let residuals: Vec<f64> = values.iter().zip(&trend).map(|(v, t)| v - t).collect();

        let n = residuals.len() as f64;
        let mean = residuals.iter().sum::<f64>() / n;
        let std_dev = (residuals.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n).sqrt();
        if std_dev == 0.0 || !std_dev.is_finite() {
            return Ok(BTreeSet::new());
        }

        let threshold = normal_quantile(1.0 - significance / 2.0);

        let mut candidates: Vec<(f64, i64)> = series
            .iter()
            .zip(&residuals)
            .filter_map(|(obs, r)| {
                let z = (r - mean) / std_dev;
                let beyond = match direction {
                    Direction::Positive => z > threshold,
                    Direction::Negative => z < -threshold,
                    Direction::Both => z.abs() > threshold,
                };
                beyond.then_some((z.abs(), obs.timestamp))
            })
            .collect();

        // Keep the strongest scores within the allowed fraction.
        let allowed = (max_anomaly_fraction * series.len() as f64).ceil() as usize;
        candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(allowed);

        Ok(candidates.into_iter().map(|(_, t)| t).collect())
    }
}

/// Inverse CDF of the standard normal distribution.
///
/// Acklam's rational approximation; relative error below 1.15e-9 over the
/// full domain, which is far tighter than any threshold decision here needs.
fn normal_quantile(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;

    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -((((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0))
    }
}
