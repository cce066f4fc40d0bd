// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Joint definitions and posture classification.
//!
//! Seven fixed joint checks, each a proximal-vertex-distal landmark triple
//! measured by [`joint_angle`] and classified against a per-category ideal
//! range tuned for cycling posture.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::geometry::joint_angle;
use crate::landmarks::{Landmark, PoseLandmark};

/// A closed interval of acceptable joint angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealRange {
    /// Lower bound, inclusive.
    pub min: f32,
    /// Upper bound, inclusive.
    pub max: f32,
}

impl IdealRange {
    /// Check whether an angle falls within the range, bounds inclusive.
    #[must_use]
    pub fn contains(&self, angle: f32) -> bool {
        self.min <= angle && angle <= self.max
    }
}

/// Joint categories sharing an ideal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointCategory {
    /// Knee flexion at the bottom of the pedal stroke.
    Knee,
    /// Ankle flexion.
    Ankle,
    /// Back inclination relative to the hip-knee line.
    Back,
    /// Arm extension from shoulder to wrist.
    Arm,
}

impl JointCategory {
    /// The ideal angle range for this category, in degrees.
    #[must_use]
    pub const fn ideal_range(self) -> IdealRange {
        match self {
            Self::Knee => IdealRange {
                min: 70.0,
                max: 110.0,
            },
            Self::Ankle => IdealRange {
                min: 80.0,
                max: 110.0,
            },
            Self::Back => IdealRange {
                min: 40.0,
                max: 60.0,
            },
            Self::Arm => IdealRange {
                min: 150.0,
                max: 175.0,
            },
        }
    }
}

/// The seven joint checks performed per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    RightKnee,
    LeftKnee,
    RightAnkle,
    LeftAnkle,
    Back,
    RightArm,
    LeftArm,
}

impl Joint {
    /// All joints, in reporting order.
    pub const ALL: [Self; 7] = [
        Self::RightKnee,
        Self::LeftKnee,
        Self::RightAnkle,
        Self::LeftAnkle,
        Self::Back,
        Self::RightArm,
        Self::LeftArm,
    ];

    /// The joint's name as used in report keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RightKnee => "right_knee",
            Self::LeftKnee => "left_knee",
            Self::RightAnkle => "right_ankle",
            Self::LeftAnkle => "left_ankle",
            Self::Back => "back",
            Self::RightArm => "right_arm",
            Self::LeftArm => "left_arm",
        }
    }

    /// The joint's category for ideal-range lookup.
    #[must_use]
    pub const fn category(self) -> JointCategory {
        match self {
            Self::RightKnee | Self::LeftKnee => JointCategory::Knee,
            Self::RightAnkle | Self::LeftAnkle => JointCategory::Ankle,
            Self::Back => JointCategory::Back,
            Self::RightArm | Self::LeftArm => JointCategory::Arm,
        }
    }

    /// The proximal-vertex-distal landmark triple measured for this joint.
    ///
    /// The back is always measured from the right-side triple, even when only
    /// the left side of the rider is visible.
    #[must_use]
    pub const fn triple(self) -> [PoseLandmark; 3] {
        use PoseLandmark as L;
        match self {
            Self::RightKnee => [L::RightHip, L::RightKnee, L::RightAnkle],
            Self::LeftKnee => [L::LeftHip, L::LeftKnee, L::LeftAnkle],
            Self::RightAnkle => [L::RightKnee, L::RightAnkle, L::RightFootIndex],
            Self::LeftAnkle => [L::LeftKnee, L::LeftAnkle, L::LeftFootIndex],
            Self::Back => [L::RightShoulder, L::RightHip, L::RightKnee],
            Self::RightArm => [L::RightShoulder, L::RightElbow, L::RightWrist],
            Self::LeftArm => [L::LeftShoulder, L::LeftElbow, L::LeftWrist],
        }
    }

    /// Measure and classify this joint from a detection result.
    ///
    /// Returns `None` when any landmark of the triple is out of range for the
    /// result.
    #[must_use]
    pub fn measure(self, landmarks: &[Landmark]) -> Option<JointAngle> {
        let [a, b, c] = self.triple();
        let angle = joint_angle(
            a.get(landmarks)?.point(),
            b.get(landmarks)?.point(),
            c.get(landmarks)?.point(),
        );

        Some(JointAngle {
            angle,
            correct: self.category().ideal_range().contains(angle),
        })
    }
}

/// A measured joint angle with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct JointAngle {
    /// Interior angle in degrees, [0, 180].
    pub angle: f32,
    /// Whether the angle falls within the joint's ideal range.
    pub correct: bool,
}

/// Classify every joint whose landmark triple is present in the result.
///
/// Joints with unavailable landmarks are simply absent from the map; they are
/// not reported as null or error entries.
#[must_use]
pub fn classify_joints(landmarks: &[Landmark]) -> BTreeMap<String, JointAngle> {
    let mut angles = BTreeMap::new();

    for joint in Joint::ALL {
        if let Some(measurement) = joint.measure(landmarks) {
            angles.insert(joint.name().to_string(), measurement);
        }
    }

    angles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::POSE_LANDMARK_COUNT;

    fn full_result() -> Vec<Landmark> {
        vec![Landmark::new(0.5, 0.5, 0.0); POSE_LANDMARK_COUNT]
    }

    fn set(landmarks: &mut [Landmark], lm: PoseLandmark, x: f32, y: f32) {
        landmarks[lm.index()] = Landmark::new(x, y, 0.0);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let range = JointCategory::Knee.ideal_range();
        assert!(range.contains(70.0));
        assert!(range.contains(110.0));
        assert!(range.contains(90.0));
        assert!(!range.contains(69.9));
        assert!(!range.contains(110.1));
    }

    #[test]
    fn test_right_knee_90_degrees_correct() {
        let mut landmarks = full_result();
        set(&mut landmarks, PoseLandmark::RightHip, 0.5, 0.5);
        set(&mut landmarks, PoseLandmark::RightKnee, 0.5, 0.6);
        set(&mut landmarks, PoseLandmark::RightAnkle, 0.6, 0.6);

        let measurement = Joint::RightKnee.measure(&landmarks).unwrap();
        assert!((measurement.angle - 90.0).abs() < 1e-3);
        assert!(measurement.correct);
    }

    #[test]
    fn test_straight_arm_incorrect_above_band() {
        let mut landmarks = full_result();
        // 180°: above the arm band's 175° ceiling
        set(&mut landmarks, PoseLandmark::LeftShoulder, 0.2, 0.2);
        set(&mut landmarks, PoseLandmark::LeftElbow, 0.4, 0.4);
        set(&mut landmarks, PoseLandmark::LeftWrist, 0.6, 0.6);

        let measurement = Joint::LeftArm.measure(&landmarks).unwrap();
        assert!((measurement.angle - 180.0).abs() < 1e-3);
        assert!(!measurement.correct);
    }

    #[test]
    fn test_back_uses_right_side_triple() {
        assert_eq!(
            Joint::Back.triple(),
            [
                PoseLandmark::RightShoulder,
                PoseLandmark::RightHip,
                PoseLandmark::RightKnee
            ]
        );
    }

    #[test]
    fn test_missing_landmark_omits_joint() {
        // Truncated result: right foot index (32) is unavailable
        let landmarks = vec![Landmark::new(0.5, 0.5, 0.0); 32];
        let angles = classify_joints(&landmarks);

        assert!(!angles.contains_key("right_ankle"));
        assert!(angles.contains_key("right_knee"));
        assert!(angles.contains_key("back"));
    }

    #[test]
    fn test_empty_result_yields_empty_map() {
        assert!(classify_joints(&[]).is_empty());
    }

    #[test]
    fn test_all_joints_present_on_full_result() {
        let angles = classify_joints(&full_result());
        assert_eq!(angles.len(), Joint::ALL.len());
        for joint in Joint::ALL {
            assert!(angles.contains_key(joint.name()));
        }
    }
}
