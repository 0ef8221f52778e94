//! Open-eye calibration
//!
//! The first frames of a run are assumed to show open eyes. Averaging their
//! EAR and scaling it down by a fraction gives a personalized separation
//! point below which eyes count as closed. Only frames with a detected face
//! feed the accumulator; detection dropouts must not bias the threshold.

use crate::DetectorError;
use tracing::info;

/// Accumulates open-eye EAR samples into a closed-eye threshold
#[derive(Debug, Clone)]
pub struct Calibrator {
    sum: f32,
    samples: u32,
    target_samples: u32,
    fraction: f32,
}

impl Calibrator {
    /// `target_samples` valid frames will be averaged; the threshold is
    /// `fraction` of that average.
    pub fn new(target_samples: u32, fraction: f32) -> Self {
        Self {
            sum: 0.0,
            samples: 0,
            target_samples,
            fraction,
        }
    }

    /// Feed one averaged openness score from a frame with a detected face
    pub fn add_sample(&mut self, score: f32) {
        if self.is_complete() {
            return;
        }
        self.sum += score;
        self.samples += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.samples >= self.target_samples
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Finish calibration and produce the threshold.
    ///
    /// Fails explicitly when no valid sample was ever collected: a zero
    /// threshold would either never trigger or constantly misfire.
    pub fn threshold(&self) -> Result<f32, DetectorError> {
        if self.samples == 0 {
            return Err(DetectorError::CalibrationFailed);
        }
        let threshold = self.fraction * (self.sum / self.samples as f32);
        info!(
            "Calibration complete: {} samples, threshold {}",
            self.samples, threshold
        );
        Ok(threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_samples_yield_scaled_value() {
        let mut cal = Calibrator::new(30, 0.70);
        for _ in 0..30 {
            cal.add_sample(0.32);
        }
        assert!(cal.is_complete());
        let t = cal.threshold().unwrap();
        assert!((t - 0.70 * 0.32).abs() < 1e-5);
    }

    #[test]
    fn test_incomplete_until_target() {
        let mut cal = Calibrator::new(30, 0.70);
        for _ in 0..29 {
            cal.add_sample(0.30);
        }
        assert!(!cal.is_complete());
        cal.add_sample(0.30);
        assert!(cal.is_complete());
    }

    #[test]
    fn test_extra_samples_ignored_after_completion() {
        let mut cal = Calibrator::new(2, 0.5);
        cal.add_sample(0.30);
        cal.add_sample(0.30);
        cal.add_sample(100.0);
        assert_eq!(cal.samples(), 2);
        let t = cal.threshold().unwrap();
        assert!((t - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_zero_samples_fails() {
        let cal = Calibrator::new(30, 0.70);
        assert!(matches!(
            cal.threshold(),
            Err(DetectorError::CalibrationFailed)
        ));
    }

    #[test]
    fn test_mixed_samples_average() {
        let mut cal = Calibrator::new(4, 0.75);
        for s in [0.28, 0.32, 0.30, 0.30] {
            cal.add_sample(s);
        }
        let t = cal.threshold().unwrap();
        assert!((t - 0.75 * 0.30).abs() < 1e-5);
    }
}
