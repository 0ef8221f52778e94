//! Drowsiness Detection Core
//!
//! Turns per-frame eye-openness scores into a single debounced alert:
//! - Self-calibration of a personalized closed-eye EAR threshold
//! - Consecutive-closed-frame counting with alert suppression
//! - Detection loop wiring frame source, locator, annunciator, and the
//!   remote session store together

pub mod annunciator;
pub mod calibration;
pub mod config;
pub mod monitor;
pub mod runner;

pub use annunciator::{Annunciator, LogAnnunciator};
pub use calibration::Calibrator;
pub use config::DetectorConfig;
pub use monitor::{DrowsinessAlert, DrowsinessMonitor, MonitorState};
pub use runner::{DetectionRunner, RunSummary, StopFlag};

use thiserror::Error;

/// Detector error types
#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calibration failed: no valid samples (no face detected)")]
    CalibrationFailed,

    #[error("No active driving session")]
    SessionInactive,

    #[error("Session store preflight failed: {0}")]
    Preflight(#[from] session_client::SessionClientError),

    #[error("Frame source failed: {0}")]
    Source(#[from] vision::VisionError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),
}
