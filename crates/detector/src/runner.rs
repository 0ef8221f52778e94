//! Detection loop
//!
//! One logical thread of control: one frame in, one decision out. Alert
//! side effects (annunciator, session-store notification) are dispatched as
//! independent tasks that are never awaited, so a slow audio device or an
//! unreachable store cannot stall frame processing.

use crate::annunciator::Annunciator;
use crate::calibration::Calibrator;
use crate::config::DetectorConfig;
use crate::monitor::{DrowsinessAlert, DrowsinessMonitor};
use crate::DetectorError;
use session_client::SessionClient;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use storage::CalibrationStore;
use tracing::{error, info, warn};
use vision::{frame_openness, FaceLocator, FrameSource, VideoFrame};

/// Cooperative stop signal for the detection loop
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// What a finished detection run looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames pulled from the source (calibration phase included)
    pub frames_processed: u64,
    /// Debounced alerts emitted
    pub alerts_emitted: u64,
}

/// Wires frame source, face locator, calibration, the state machine, and
/// the session store into one detection run.
pub struct DetectionRunner {
    config: DetectorConfig,
    client: Arc<SessionClient>,
    annunciator: Arc<dyn Annunciator>,
    stop: StopFlag,
}

impl DetectionRunner {
    pub fn new(
        config: DetectorConfig,
        client: SessionClient,
        annunciator: Arc<dyn Annunciator>,
    ) -> Result<Self, DetectorError> {
        config.validate()?;
        Ok(Self {
            config,
            client: Arc::new(client),
            annunciator,
            stop: StopFlag::new(),
        })
    }

    /// Handle for stopping the loop from another task
    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    /// Run detection until the source ends, fails, or the stop flag is set.
    ///
    /// Aborts before touching the source when the session store is
    /// unreachable or reports no active session.
    pub async fn run<S, L>(&self, source: &mut S, locator: &L) -> Result<RunSummary, DetectorError>
    where
        S: FrameSource,
        L: FaceLocator,
    {
        // Preflight: do not start detecting outside a driving session.
        if !self.client.session_active().await? {
            return Err(DetectorError::SessionInactive);
        }
        info!("Driving session active, starting detection");

        let mut frames_processed = 0u64;
        let threshold = self
            .resolve_threshold(source, locator, &mut frames_processed)?;

        let mut monitor = DrowsinessMonitor::new(threshold, self.config.trigger_frames());
        info!(
            "Monitoring with threshold {} and trigger count {}",
            threshold,
            self.config.trigger_frames()
        );

        let mut alerts_emitted = 0u64;
        while let Some(frame) = self.pull_frame(source) {
            frames_processed += 1;
            let score = self.score_frame(locator, &frame);
            if let Some(alert) = monitor.observe(score) {
                alerts_emitted += 1;
                self.dispatch_alert(alert);
            }
        }

        info!(
            "Detection loop finished: {} frames, {} alerts",
            frames_processed, alerts_emitted
        );
        Ok(RunSummary {
            frames_processed,
            alerts_emitted,
        })
    }

    /// Load a persisted threshold or calibrate against the early frames.
    fn resolve_threshold<S, L>(
        &self,
        source: &mut S,
        locator: &L,
        frames_processed: &mut u64,
    ) -> Result<f32, DetectorError>
    where
        S: FrameSource,
        L: FaceLocator,
    {
        let store = self.config.calibration_path.as_ref().map(CalibrationStore::new);

        if let Some(store) = &store {
            if let Some(threshold) = store.load()? {
                info!("Using persisted threshold {}", threshold);
                return Ok(threshold);
            }
        }

        info!(
            "Calibrating: keep eyes open for {} detected frames",
            self.config.calibration_frames
        );
        let mut calibrator = Calibrator::new(
            self.config.calibration_frames,
            self.config.threshold_fraction,
        );

        while !calibrator.is_complete() {
            let Some(frame) = self.pull_frame(source) else {
                // Source ended mid-calibration; fall through and let the
                // sample count decide whether this is usable.
                break;
            };
            *frames_processed += 1;
            // Undetected frames do not count toward the sample target.
            if let Some(score) = self.score_frame(locator, &frame) {
                calibrator.add_sample(score);
            }
        }

        let threshold = calibrator.threshold()?;
        if let Some(store) = &store {
            if let Err(e) = store.save(threshold) {
                warn!("Could not persist calibration: {}", e);
            }
        }
        Ok(threshold)
    }

    /// Pull the next frame, converting end-of-stream, source error, and the
    /// stop flag into a clean loop exit.
    fn pull_frame<S: FrameSource>(&self, source: &mut S) -> Option<VideoFrame> {
        if self.stop.is_stopped() {
            info!("Stop requested, ending detection loop");
            return None;
        }
        match source.next_frame() {
            Ok(Some(frame)) => Some(frame),
            Ok(None) => {
                info!("Frame source exhausted");
                None
            }
            Err(e) => {
                error!("Frame source failed: {}", e);
                None
            }
        }
    }

    /// Locate faces and score openness; locator failure on a single frame
    /// is logged and treated as no observation.
    fn score_frame<L: FaceLocator>(&self, locator: &L, frame: &VideoFrame) -> Option<f32> {
        match locator.locate(frame) {
            Ok(faces) => frame_openness(&faces),
            Err(e) => {
                warn!("Landmark location failed on frame {}: {}", frame.sequence, e);
                None
            }
        }
    }

    /// Fire-and-forget side effects: annunciate and notify the store.
    /// Neither is awaited; failures are logged by the tasks themselves.
    fn dispatch_alert(&self, alert: DrowsinessAlert) {
        let annunciator = Arc::clone(&self.annunciator);
        tokio::task::spawn_blocking(move || annunciator.announce(&alert));

        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            if let Err(e) = client.report_alert().await {
                warn!("Could not notify session store: {}", e);
            }
        });
    }
}
