//! Sampled evaluation of windowed detection against batch ground truth.

use bench_harness::LatencySamples;
use evaluation_api::HarnessConfig;
use evaluation_spi::{EvaluationError, EvaluationReport, GroundTruth, Result, TrialOutcome};
use monitor::{BatchOracle, Observation, OracleConfig, OracleError, SeriesKey, WindowedDetector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smoothing::ewma_batch;
use std::collections::BTreeSet;

use crate::pool::SeriesPool;

/// Smooth one series with the EWMA rule, preserving timestamps.
pub fn smooth_series(series: &[Observation], center_of_mass: f64) -> Vec<Observation> {
    let values: Vec<f64> = series.iter().map(|o| o.value).collect();
    ewma_batch(&values, center_of_mass)
        .into_iter()
        .zip(series)
        .map(|(value, obs)| Observation::new(obs.timestamp, value))
        .collect()
}

/// Compute batch ground truth: run the oracle over each series' full
/// smoothed history and collect the flagged timestamps.
///
/// A series too short for the oracle's model contributes an empty flag
/// set; malformed input propagates as fatal.
pub fn ground_truth(
    pool: &SeriesPool,
    oracle: &dyn BatchOracle,
    oracle_config: &OracleConfig,
    center_of_mass: f64,
) -> Result<GroundTruth> {
    let mut truth = GroundTruth::new();
    for (key, series) in pool.iter() {
        let smoothed = smooth_series(series, center_of_mass);
        let flags = match oracle.detect(
            &smoothed,
            oracle_config.significance,
            oracle_config.max_anomaly_fraction,
            oracle_config.direction,
        ) {
            Ok(flags) => flags,
            Err(OracleError::InsufficientData { .. }) => BTreeSet::new(),
            Err(err) => return Err(err.into()),
        };
        truth.insert(key.clone(), flags);
    }
    Ok(truth)
}

/// Evaluation harness: samples (series, timestamp) candidates, runs the
/// windowed detector on the trailing window ending at each candidate, and
/// scores the predictions against the batch ground truth.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationHarness {
    detector: WindowedDetector,
}

impl EvaluationHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one evaluation of `config.trials` independent trials.
    ///
    /// Sampling is biased toward known-anomalous timestamps with
    /// probability `config.anomaly_bias`, bounded by
    /// `config.max_resample_attempts` per trial; an exhausted trial is
    /// recorded as failed (false negative, sentinel latency), never looped.
    /// With a fixed seed the full trial sequence, and therefore every
    /// classification count, is reproducible.
    pub fn run(
        &self,
        pool: &SeriesPool,
        truth: &GroundTruth,
        oracle: &dyn BatchOracle,
        oracle_config: &OracleConfig,
        config: &HarnessConfig,
    ) -> Result<EvaluationReport> {
        if pool.is_empty() {
            return Err(EvaluationError::EmptyPool);
        }
        if config.window_size == 0 {
            return Err(EvaluationError::InvalidParameter {
                name: "window_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        // A usable candidate index needs window_size points of history
        // before it, so at least one series must be longer than the window.
        if pool.longest() <= config.window_size {
            return Err(EvaluationError::WindowTooLarge {
                window: config.window_size,
                longest: pool.longest(),
            });
        }

        let keys: Vec<&SeriesKey> = pool.keys().collect();
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut report = EvaluationReport::new(config.scoring);
        let mut latencies = LatencySamples::new();

        for trial in 0..config.trials {
            let Some((key, index)) = self.sample_candidate(pool, truth, config, &keys, &mut rng)
            else {
                tracing::debug!(trial, "resampling bound exhausted, recording failed trial");
                report.record_failed();
                continue;
            };

            // Re-smoothing per trial keeps trials independent: each sees the
            // series exactly as a fresh online pass would.
            let series = pool.get(key).ok_or(EvaluationError::EmptyPool)?;
            let smoothed = smooth_series(series, config.center_of_mass);
            let window = &smoothed[index + 1 - config.window_size..=index];

            let verdict = self.detector.evaluate(window, oracle, oracle_config)?;
            let actual = truth
                .get(key)
                .is_some_and(|flags| flags.contains(&smoothed[index].timestamp));

            tracing::debug!(
                trial,
                series = %key,
                timestamp = smoothed[index].timestamp,
                actual,
                predicted = verdict.is_anomaly,
                "trial evaluated"
            );

            report.record(&TrialOutcome::new(actual, verdict.is_anomaly, verdict.elapsed));
            latencies.record(verdict.elapsed);
        }

        // Failed trials take the largest latency seen anywhere in the run,
        // applied after the loop so a failure that precedes every success
        // cannot contribute a zero sample. A run with no successful trials
        // has no latency to report and its mean stays zero.
        let sentinel = latencies.max();
        for _ in 0..report.failed_trials {
            latencies.record(sentinel);
        }
        report.mean_latency = latencies.mean();
        tracing::info!(
            trials = report.trials,
            failed = report.failed_trials,
            score = report.score(),
            mean_latency = ?report.mean_latency,
            "evaluation run complete"
        );
        Ok(report)
    }

    /// Draw one (series, candidate index) pair, or `None` when the retry
    /// bound is exhausted.
    fn sample_candidate<'a>(
        &self,
        pool: &SeriesPool,
        truth: &GroundTruth,
        config: &HarnessConfig,
        keys: &[&'a SeriesKey],
        rng: &mut StdRng,
    ) -> Option<(&'a SeriesKey, usize)> {
        let want_anomaly = rng.gen::<f64>() < config.anomaly_bias;

        for _ in 0..config.max_resample_attempts {
            let key = keys[rng.gen_range(0..keys.len())];
            let series = pool.get(key)?;

            // Candidates need a full window of history: exclude the first
            // window_size points.
            if series.len() <= config.window_size {
                continue;
            }
            let usable = config.window_size..series.len();

            if want_anomaly {
                let flags = truth.get(key);
                let candidates: Vec<usize> = usable
                    .filter(|&i| {
                        flags.is_some_and(|f| f.contains(&series[i].timestamp))
                    })
                    .collect();
                if candidates.is_empty() {
                    continue;
                }
                return Some((key, candidates[rng.gen_range(0..candidates.len())]));
            }

            return Some((key, rng.gen_range(usable)));
        }

        None
    }
}
