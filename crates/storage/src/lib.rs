//! Calibration Persistence
//!
//! Stores the personalized EAR threshold as a small keyed JSON record so a
//! restarted detector can skip the calibration phase.

mod calibration;

pub use calibration::CalibrationStore;

use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed calibration record: {0}")]
    Malformed(#[from] serde_json::Error),
}
