//! Vision primitives for the drowsiness pipeline
//!
//! Provides:
//! - Decoded RGB video frames and frame-source abstraction
//! - Facial eye landmarks in the fixed 6-point anatomical order
//! - Eye aspect ratio (EAR) scoring with degenerate-geometry guards

pub mod ear;
pub mod frame;
pub mod landmarks;

pub use ear::{eye_aspect_ratio, frame_openness};
pub use frame::VideoFrame;
pub use landmarks::{EyeLandmarks, FaceObservation, Point};

use thiserror::Error;

/// Vision error types
#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Frame source failed: {0}")]
    Source(String),

    #[error("Frame decode failed: {0}")]
    Decode(String),

    #[error("Landmark location failed: {0}")]
    Locator(String),
}

/// Ordered supplier of video frames.
///
/// `Ok(None)` signals a clean end of stream; an error signals an unreadable
/// device. Either one terminates the detection loop.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<VideoFrame>, VisionError>;
}

/// Black-box face and eye-landmark locator.
///
/// Returns zero or more faces per frame; each face carries whatever eyes the
/// locator managed to resolve. An empty vector is a normal outcome (driver
/// looked away, camera blocked), not an error.
pub trait FaceLocator {
    fn locate(&self, frame: &VideoFrame) -> Result<Vec<FaceObservation>, VisionError>;
}
