//! Exponentially weighted moving average with warmup widening.

use smoothing_api::EwmaConfig;
use smoothing_spi::{Result, Smoother, SmoothingError};

/// Exponentially weighted moving average smoother.
///
/// Decay is expressed as a center of mass `c >= 0`. For the first
/// observation the level is the observation itself; for the observation at
/// 0-based index `r >= 1` the update is
///
/// `avg += (value - avg) / (min(c, r) + 1)`
///
/// The `min(c, r)` term widens the effective smoothing span over the first
/// `c` observations, so early values are not drowned by an undersized
/// divisor. An online pass is numerically identical to [`ewma_batch`] over
/// the same sequence, which is the property the streaming pipeline relies
/// on.
///
/// # Example
///
/// ```rust
/// use smoothing_core::EwmaSmoother;
/// use smoothing_spi::Smoother;
///
/// let mut smoother = EwmaSmoother::new(1.0).unwrap();
/// assert_eq!(smoother.update(0.0), 0.0);
/// assert_eq!(smoother.update(10.0), 5.0);
/// assert_eq!(smoother.update(0.0), 2.5);
/// ```
#[derive(Debug, Clone)]
pub struct EwmaSmoother {
    center_of_mass: f64,
    avg: f64,
    count: usize,
}

impl EwmaSmoother {
    /// Create a new EWMA smoother.
    ///
    /// # Arguments
    ///
    /// * `center_of_mass` - Decay parameter, must be finite and `>= 0`.
    ///                      Larger values smooth over a longer history.
    pub fn new(center_of_mass: f64) -> Result<Self> {
        if !center_of_mass.is_finite() || center_of_mass < 0.0 {
            return Err(SmoothingError::InvalidParameter {
                name: "center_of_mass".to_string(),
                reason: "must be finite and non-negative".to_string(),
            });
        }

        Ok(Self {
            center_of_mass,
            avg: 0.0,
            count: 0,
        })
    }

    /// Create from configuration.
    pub fn from_config(config: &EwmaConfig) -> Result<Self> {
        Self::new(config.center_of_mass)
    }

    /// Get the center-of-mass parameter.
    pub fn center_of_mass(&self) -> f64 {
        self.center_of_mass
    }
}

impl Smoother for EwmaSmoother {
    fn update(&mut self, value: f64) -> f64 {
        if self.count == 0 {
            self.avg = value;
        } else {
            let effective_c = self.center_of_mass.min(self.count as f64);
            self.avg += (value - self.avg) / (effective_c + 1.0);
        }
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

/// Batch reference for the same exponentially weighted mean.
///
/// Computes, in one pass over the full sequence, the value the online
/// smoother would hold after each observation. Used as the ground-truth
/// side of the online/batch parity property and by callers that already
/// hold the full series in memory.
pub fn ewma_batch(values: &[f64], center_of_mass: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut avg = 0.0;

    for (r, &value) in values.iter().enumerate() {
        if r == 0 {
            avg = value;
        } else {
            let effective_c = center_of_mass.min(r as f64);
            avg += (value - avg) / (effective_c + 1.0);
        }
        out.push(avg);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_sets_level() {
        let mut smoother = EwmaSmoother::new(3.0).unwrap();
        assert_eq!(smoother.update(42.0), 42.0);
        assert_eq!(smoother.value(), Some(42.0));
    }

    #[test]
    fn test_center_of_mass_one_sequence() {
        // effective_c at r=1 is min(1,1)=1 -> divisor 2; at r=2 min(1,2)=1
        let mut smoother = EwmaSmoother::new(1.0).unwrap();
        assert_eq!(smoother.update(0.0), 0.0);
        assert_eq!(smoother.update(10.0), 5.0);
        assert_eq!(smoother.update(0.0), 2.5);
    }

    #[test]
    fn test_warmup_widening() {
        // With a large center of mass the early divisors are count-limited,
        // so the smoother behaves like a cumulative mean during warmup.
        let mut smoother = EwmaSmoother::new(100.0).unwrap();
        smoother.update(2.0);
        assert_eq!(smoother.update(4.0), 3.0);
        assert_eq!(smoother.update(6.0), 4.0);
    }

    #[test]
    fn test_online_matches_batch() {
        let values: Vec<f64> = (0..200)
            .map(|i| {
                let t = i as f64;
                20.0 + (t * 0.3).sin() * 5.0 + (t * 0.07).cos() * 2.0
            })
            .collect();

        for c in [0.0, 1.0, 2.5, 5.0, 20.0] {
            let batch = ewma_batch(&values, c);
            let mut smoother = EwmaSmoother::new(c).unwrap();
            for (i, &v) in values.iter().enumerate() {
                let online = smoother.update(v);
                let reference = batch[i];
                let tolerance = 1e-9 * reference.abs().max(1.0);
                assert!(
                    (online - reference).abs() <= tolerance,
                    "index {}: online {} vs batch {}",
                    i,
                    online,
                    reference
                );
            }
        }
    }

    #[test]
    fn test_zero_center_of_mass_tracks_input() {
        let mut smoother = EwmaSmoother::new(0.0).unwrap();
        smoother.update(1.0);
        assert_eq!(smoother.update(7.0), 7.0);
        assert_eq!(smoother.update(-3.0), -3.0);
    }

    #[test]
    fn test_nan_propagates() {
        let mut smoother = EwmaSmoother::new(2.0).unwrap();
        smoother.update(1.0);
        assert!(smoother.update(f64::NAN).is_nan());
        // Once poisoned, the level stays NaN, same as a batch pass.
        assert!(smoother.update(1.0).is_nan());
    }

    #[test]
    fn test_infinity_propagates() {
        let mut smoother = EwmaSmoother::new(2.0).unwrap();
        smoother.update(1.0);
        assert_eq!(smoother.update(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_invalid_center_of_mass_rejected() {
        assert!(EwmaSmoother::new(-1.0).is_err());
        assert!(EwmaSmoother::new(f64::NAN).is_err());
        assert!(EwmaSmoother::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_reset() {
        let mut smoother = EwmaSmoother::new(2.0).unwrap();
        smoother.update(5.0);
        smoother.reset();
        assert_eq!(smoother.value(), None);
        assert_eq!(smoother.count(), 0);
        assert_eq!(smoother.update(3.0), 3.0);
    }

    #[test]
    fn test_batch_empty_input() {
        assert!(ewma_batch(&[], 2.0).is_empty());
    }
}
