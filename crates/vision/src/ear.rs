//! Eye aspect ratio (EAR) scoring
//!
//! EAR is the ratio of vertical eyelid separation to horizontal eye width.
//! Typical open-eye values sit around 0.25-0.35 and fall toward 0 as the
//! eye closes. Being a ratio of distances it is invariant under translation
//! and uniform scaling of the landmark set.

use crate::landmarks::{EyeLandmarks, FaceObservation};

/// Compute the eye aspect ratio `(A + B) / (2 * C)` where A and B are the
/// two vertical lid separations and C the horizontal eye width.
///
/// Returns `None` for degenerate geometry (zero eye width) instead of
/// dividing by zero; the caller treats that as "no reliable score".
pub fn eye_aspect_ratio(eye: &EyeLandmarks) -> Option<f32> {
    let p = eye.points();
    let a = p[1].distance(&p[5]);
    let b = p[2].distance(&p[4]);
    let c = p[0].distance(&p[3]);

    if c == 0.0 {
        return None;
    }
    Some((a + b) / (2.0 * c))
}

/// Averaged openness score for one frame.
///
/// Uses the first detected face with a resolved eye. Both eyes present:
/// arithmetic mean of the two scores. One eye present: that eye's score
/// stands alone -- defaulting the missing eye to 0 would read as "fully
/// closed" and poison the average. No face or no scoreable eye: `None`,
/// meaning no observation this frame.
pub fn frame_openness(faces: &[FaceObservation]) -> Option<f32> {
    let face = faces.iter().find(|f| f.has_eye())?;

    let left = face.left_eye.as_ref().and_then(eye_aspect_ratio);
    let right = face.right_eye.as_ref().and_then(eye_aspect_ratio);

    match (left, right) {
        (Some(l), Some(r)) => Some((l + r) / 2.0),
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Point;
    use proptest::prelude::*;

    /// Open eye, width 4, lid separations 1.0 each -> EAR 0.25
    fn open_eye() -> EyeLandmarks {
        EyeLandmarks::new([
            Point::new(0.0, 0.0),  // outer corner
            Point::new(1.0, 0.5),  // upper lid
            Point::new(3.0, 0.5),  // upper lid
            Point::new(4.0, 0.0),  // inner corner
            Point::new(3.0, -0.5), // lower lid
            Point::new(1.0, -0.5), // lower lid
        ])
    }

    fn transformed(eye: &EyeLandmarks, scale: f32, dx: f32, dy: f32) -> EyeLandmarks {
        let p = eye.points();
        EyeLandmarks::new(p.map(|pt| Point::new(pt.x * scale + dx, pt.y * scale + dy)))
    }

    #[test]
    fn test_known_ratio() {
        let ear = eye_aspect_ratio(&open_eye()).unwrap();
        assert!((ear - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_width_is_unscored() {
        let collapsed = EyeLandmarks::new([Point::new(1.0, 1.0); 6]);
        assert_eq!(eye_aspect_ratio(&collapsed), None);
    }

    #[test]
    fn test_frame_average_both_eyes() {
        let wide = transformed(&open_eye(), 1.0, 0.0, 0.0);
        let mut squint = open_eye();
        // Halve the lid separations: EAR 0.125
        for i in [1, 2, 4, 5] {
            squint.0[i].y *= 0.5;
        }
        let face = FaceObservation::new(Some(wide), Some(squint));
        let score = frame_openness(&[face]).unwrap();
        assert!((score - 0.1875).abs() < 1e-6);
    }

    #[test]
    fn test_single_eye_stands_alone() {
        let face = FaceObservation::new(Some(open_eye()), None);
        let score = frame_openness(&[face]).unwrap();
        assert!((score - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_eye_excluded_from_average() {
        let collapsed = EyeLandmarks::new([Point::new(1.0, 1.0); 6]);
        let face = FaceObservation::new(Some(collapsed), Some(open_eye()));
        let score = frame_openness(&[face]).unwrap();
        assert!((score - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_no_face_no_observation() {
        assert_eq!(frame_openness(&[]), None);
        let faceless = FaceObservation::new(None, None);
        assert_eq!(frame_openness(&[faceless]), None);
    }

    #[test]
    fn test_eyeless_face_skipped_for_scoreable_one() {
        let eyeless = FaceObservation::new(None, None);
        let scoreable = FaceObservation::new(Some(open_eye()), Some(open_eye()));
        let score = frame_openness(&[eyeless, scoreable]).unwrap();
        assert!((score - 0.25).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_translation_invariant(dx in -1000.0f32..1000.0, dy in -1000.0f32..1000.0) {
            let base = eye_aspect_ratio(&open_eye()).unwrap();
            let moved = eye_aspect_ratio(&transformed(&open_eye(), 1.0, dx, dy)).unwrap();
            prop_assert!((base - moved).abs() < 1e-3);
        }

        #[test]
        fn prop_uniform_scale_invariant(scale in 0.01f32..100.0) {
            let base = eye_aspect_ratio(&open_eye()).unwrap();
            let scaled = eye_aspect_ratio(&transformed(&open_eye(), scale, 0.0, 0.0)).unwrap();
            prop_assert!((base - scaled).abs() < 1e-3);
        }
    }
}
