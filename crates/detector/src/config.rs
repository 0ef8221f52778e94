//! Detector configuration

use crate::DetectorError;
use serde::{Deserialize, Serialize};

/// Detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Frames with a detected face required to complete calibration
    pub calibration_frames: u32,

    /// Fraction of the open-eye average used as the closed-eye threshold.
    /// Must be strictly between 0 and 1.
    pub threshold_fraction: f32,

    /// Sustained eye closure that triggers an alert (seconds)
    pub trigger_seconds: f32,

    /// Expected frame rate of the source (frames per second)
    pub fps: u32,

    /// Calibration record path; `None` disables persistence
    pub calibration_path: Option<String>,

    /// Session store base URL
    pub session_url: String,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            calibration_frames: 30,
            threshold_fraction: 0.70,
            trigger_seconds: 5.0,
            fps: 15,
            calibration_path: Some("calibration.json".to_string()),
            session_url: "http://localhost:5000".to_string(),
        }
    }
}

impl DetectorConfig {
    /// Create strict config (shorter closure tolerated)
    pub fn strict() -> Self {
        Self {
            trigger_seconds: 3.0,
            threshold_fraction: 0.80,
            ..Default::default()
        }
    }

    /// Create lenient config (longer closure tolerated)
    pub fn lenient() -> Self {
        Self {
            trigger_seconds: 6.0,
            threshold_fraction: 0.60,
            ..Default::default()
        }
    }

    /// Load from an optional `detector.toml` file layered with
    /// `DETECTOR_*` environment variables, falling back to defaults.
    pub fn load() -> Result<Self, DetectorError> {
        Self::load_from("detector")
    }

    /// Same layering against an explicit config file base name/path.
    /// Precedence: defaults < file < environment.
    pub fn load_from(file: &str) -> Result<Self, DetectorError> {
        let defaults = config::Config::try_from(&DetectorConfig::default())
            .map_err(|e| DetectorError::Config(e.to_string()))?;
        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("DETECTOR").try_parsing(true))
            .build()
            .map_err(|e| DetectorError::Config(e.to_string()))?;

        let cfg: DetectorConfig = settings
            .try_deserialize()
            .map_err(|e| DetectorError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Consecutive closed frames required to trigger an alert
    pub fn trigger_frames(&self) -> u32 {
        (self.trigger_seconds * self.fps as f32).round().max(1.0) as u32
    }

    pub fn validate(&self) -> Result<(), DetectorError> {
        if self.threshold_fraction <= 0.0 || self.threshold_fraction >= 1.0 {
            return Err(DetectorError::Config(format!(
                "threshold_fraction must be in (0, 1), got {}",
                self.threshold_fraction
            )));
        }
        if self.calibration_frames == 0 {
            return Err(DetectorError::Config(
                "calibration_frames must be positive".to_string(),
            ));
        }
        if self.fps == 0 {
            return Err(DetectorError::Config("fps must be positive".to_string()));
        }
        if self.trigger_seconds <= 0.0 {
            return Err(DetectorError::Config(
                "trigger_seconds must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
