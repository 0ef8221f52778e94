//! Facial eye landmarks

use serde::{Deserialize, Serialize};

/// 2-D landmark point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Six landmark points for one eye, in fixed anatomical order:
/// outer corner, two upper-lid points, inner corner, two lower-lid points.
///
/// Order is significant: EAR takes distances between specific index pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyeLandmarks(pub [Point; 6]);

impl EyeLandmarks {
    pub fn new(points: [Point; 6]) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point; 6] {
        &self.0
    }
}

/// One detected face with whatever eyes the locator resolved.
///
/// A locator that finds a face but only one eye (partial occlusion, steep
/// head angle) reports the missing eye as `None` rather than a zeroed eye.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceObservation {
    pub left_eye: Option<EyeLandmarks>,
    pub right_eye: Option<EyeLandmarks>,
}

impl FaceObservation {
    pub fn new(left_eye: Option<EyeLandmarks>, right_eye: Option<EyeLandmarks>) -> Self {
        Self { left_eye, right_eye }
    }

    /// True if at least one eye was resolved
    pub fn has_eye(&self) -> bool {
        self.left_eye.is_some() || self.right_eye.is_some()
    }
}
