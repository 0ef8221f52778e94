//! Alert annunciation
//!
//! The annunciator is fire-and-forget: the detection loop spawns it on a
//! blocking task and never waits for it, so a slow audio device cannot
//! stall frame processing. Real audio/overlay backends live outside this
//! crate and implement the trait.

use crate::monitor::DrowsinessAlert;
use tracing::warn;

/// Plays or displays a drowsiness alert; no feedback to the core
pub trait Annunciator: Send + Sync {
    fn announce(&self, alert: &DrowsinessAlert);
}

/// Annunciator that only logs; default when no audio backend is wired up
#[derive(Debug, Default)]
pub struct LogAnnunciator;

impl Annunciator for LogAnnunciator {
    fn announce(&self, alert: &DrowsinessAlert) {
        warn!(
            "DROWSINESS ALERT: eyes closed for {} frames (score {})",
            alert.closed_frames, alert.score
        );
    }
}
