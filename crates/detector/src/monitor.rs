//! Drowsiness state machine
//!
//! Counts consecutive below-threshold frames and converts the noisy
//! per-frame signal into a single debounced alert per closed-eye episode.
//! The counter resets after each trigger so continued closure can re-alert
//! after another full trigger window; the suppression flag, cleared only by
//! an at-or-above-threshold frame, is the sole guard against alert spam.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Logical state of the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitorState {
    /// Eyes open (or never observed closed): counter 0, unsuppressed
    Open,
    /// Eyes closed for fewer than the trigger count of frames
    AccumulatingClosed,
    /// An alert fired this episode; suppressed until eyes reopen
    Alerted,
}

/// A single debounced drowsiness alert
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrowsinessAlert {
    /// Openness score of the frame that completed the trigger window
    pub score: f32,
    /// Closed frames accumulated when the alert fired
    pub closed_frames: u32,
}

/// Consecutive-closed-frame counter with alert suppression
#[derive(Debug, Clone)]
pub struct DrowsinessMonitor {
    threshold: f32,
    trigger_frames: u32,
    closed_frames: u32,
    suppressed: bool,
}

impl DrowsinessMonitor {
    /// `threshold` separates open from closed; `trigger_frames` is the
    /// consecutive-closed count that fires an alert.
    pub fn new(threshold: f32, trigger_frames: u32) -> Self {
        Self {
            threshold,
            trigger_frames: trigger_frames.max(1),
            closed_frames: 0,
            suppressed: false,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn state(&self) -> MonitorState {
        if self.suppressed {
            MonitorState::Alerted
        } else if self.closed_frames > 0 {
            MonitorState::AccumulatingClosed
        } else {
            MonitorState::Open
        }
    }

    /// Feed one frame's observation.
    ///
    /// `None` means no observation this frame (no face, degenerate
    /// landmarks): counter and suppression stay untouched so transient
    /// detection dropouts cannot cause false resets.
    pub fn observe(&mut self, score: Option<f32>) -> Option<DrowsinessAlert> {
        let score = score?;

        if score >= self.threshold {
            self.closed_frames = 0;
            self.suppressed = false;
            return None;
        }

        self.closed_frames += 1;
        if self.closed_frames < self.trigger_frames {
            debug!(
                "Eyes closed: {}/{} frames",
                self.closed_frames, self.trigger_frames
            );
            return None;
        }

        // Trigger window complete. Reset the counter either way so sustained
        // closure re-triggers after another full window once unsuppressed.
        let closed_frames = self.closed_frames;
        self.closed_frames = 0;

        if self.suppressed {
            return None;
        }
        self.suppressed = true;
        warn!(
            "Drowsiness alert: eyes closed for {} consecutive frames (score {})",
            closed_frames, score
        );
        Some(DrowsinessAlert {
            score,
            closed_frames,
        })
    }
}
