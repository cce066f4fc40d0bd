// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Landmark types and detector index tables.
//!
//! The pose model emits 33 body landmarks per frame in a fixed order; the
//! face-mesh model emits 468 face landmarks. Indices are typed as enums so a
//! wrong index is a compile error rather than a silent out-of-range lookup.

use serde::Serialize;
use utoipa::ToSchema;

use crate::geometry::Point2;

/// A single detected landmark in normalized image coordinates.
///
/// `x` and `y` are image-relative (typically [0, 1]); `z` is a relative depth
/// estimate with the same scale as `x`. Landmarks carry no identity beyond
/// their index within a detection result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Landmark {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
    /// Relative depth.
    pub z: f32,
}

impl Landmark {
    /// Create a new landmark.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Project to the 2D point used for angle computation.
    #[must_use]
    pub const fn point(&self) -> Point2 {
        Point2 {
            x: self.x,
            y: self.y,
        }
    }
}

/// Body landmark indices of the 33-point pose topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

/// Number of landmarks in the pose topology.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Number of landmarks in the face-mesh topology.
pub const FACE_LANDMARK_COUNT: usize = 468;

/// Face-mesh index of the upper-lip midpoint.
pub const FACE_UPPER_LIP: usize = 13;

/// Face-mesh index of the lower-lip midpoint.
pub const FACE_LOWER_LIP: usize = 14;

impl PoseLandmark {
    /// The landmark's fixed index within a detection result.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up this landmark in a detection result.
    ///
    /// Returns `None` when the result is too short to contain the index.
    #[must_use]
    pub fn get(self, landmarks: &[Landmark]) -> Option<Landmark> {
        landmarks.get(self.index()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_indices() {
        assert_eq!(PoseLandmark::Nose.index(), 0);
        assert_eq!(PoseLandmark::RightShoulder.index(), 12);
        assert_eq!(PoseLandmark::RightHip.index(), 24);
        assert_eq!(PoseLandmark::RightFootIndex.index(), 32);
    }

    #[test]
    fn test_get_guards_length() {
        let landmarks = vec![Landmark::new(0.1, 0.2, 0.0); 12];
        assert!(PoseLandmark::LeftShoulder.get(&landmarks).is_some());
        assert!(PoseLandmark::RightShoulder.get(&landmarks).is_none());
        assert!(PoseLandmark::RightFootIndex.get(&landmarks).is_none());
    }

    #[test]
    fn test_landmark_point_projection() {
        let lm = Landmark::new(0.25, 0.75, -0.1);
        let p = lm.point();
        assert!((p.x - 0.25).abs() < f32::EPSILON);
        assert!((p.y - 0.75).abs() < f32::EPSILON);
    }
}
