//! Calibration record storage

use crate::StorageError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk calibration record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CalibrationRecord {
    ear_threshold: f32,
}

/// File-backed store for the calibrated EAR threshold.
///
/// The record is written once after calibration completes and read at
/// startup; a present record bypasses the calibration phase entirely.
pub struct CalibrationStore {
    path: PathBuf,
}

impl CalibrationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load a persisted threshold, if any.
    ///
    /// A missing file is `Ok(None)` (first run); a present but malformed
    /// file is an error so a corrupt record is not silently recalibrated
    /// away.
    pub fn load(&self) -> Result<Option<f32>, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No calibration record at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let record: CalibrationRecord = serde_json::from_str(&contents)?;
        info!(
            "Loaded calibrated threshold {} from {}",
            record.ear_threshold,
            self.path.display()
        );
        Ok(Some(record.ear_threshold))
    }

    /// Persist a freshly calibrated threshold
    pub fn save(&self, threshold: f32) -> Result<(), StorageError> {
        let record = CalibrationRecord {
            ear_threshold: threshold,
        };
        let contents = serde_json::to_string_pretty(&record)?;
        std::fs::write(&self.path, contents)?;
        info!(
            "Saved calibrated threshold {} to {}",
            threshold,
            self.path.display()
        );
        Ok(())
    }
}
