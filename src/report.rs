// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-frame posture report.
//!
//! Adapts a detection result into the flat landmark list and joint angle map
//! returned to clients. A frame with no body present produces an empty report,
//! which is a normal outcome rather than an error.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::joints::{JointAngle, classify_joints};
use crate::landmarks::Landmark;

/// Posture analysis for a single frame.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct PostureReport {
    /// All detected landmarks in detector order, normalized coordinates.
    pub landmarks: Vec<Landmark>,
    /// Joint name to measured angle and classification.
    pub angles: BTreeMap<String, JointAngle>,
}

impl PostureReport {
    /// Build a report from a detection result.
    ///
    /// `None` means no body was present in the frame and yields an empty
    /// report.
    #[must_use]
    pub fn from_detection(detection: Option<Vec<Landmark>>) -> Self {
        match detection {
            Some(landmarks) => {
                let angles = classify_joints(&landmarks);
                Self { landmarks, angles }
            }
            None => Self::default(),
        }
    }

    /// Check whether the frame contained no body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Number of joints that were measurable this frame.
    #[must_use]
    pub fn measured_joints(&self) -> usize {
        self.angles.len()
    }

    /// Number of measured joints outside their ideal range.
    #[must_use]
    pub fn incorrect_joints(&self) -> usize {
        self.angles.values().filter(|a| !a.correct).count()
    }

    /// One-line summary for log output (e.g. "7 joints, 2 outside range").
    #[must_use]
    pub fn verbose(&self) -> String {
        if self.is_empty() {
            return "(no body detected)".to_string();
        }

        format!(
            "{} joints, {} outside range",
            self.measured_joints(),
            self.incorrect_joints()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::POSE_LANDMARK_COUNT;

    #[test]
    fn test_no_detection_is_empty_report() {
        let report = PostureReport::from_detection(None);
        assert!(report.is_empty());
        assert!(report.landmarks.is_empty());
        assert!(report.angles.is_empty());
    }

    #[test]
    fn test_empty_report_serializes_to_empty_json() {
        let report = PostureReport::from_detection(None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["landmarks"], serde_json::json!([]));
        assert_eq!(json["angles"], serde_json::json!({}));
    }

    #[test]
    fn test_full_detection_reports_all_joints() {
        let landmarks = vec![Landmark::new(0.5, 0.5, 0.0); POSE_LANDMARK_COUNT];
        let report = PostureReport::from_detection(Some(landmarks));
        assert_eq!(report.landmarks.len(), POSE_LANDMARK_COUNT);
        assert_eq!(report.measured_joints(), 7);
    }

    #[test]
    fn test_verbose_summary() {
        assert_eq!(
            PostureReport::from_detection(None).verbose(),
            "(no body detected)"
        );

        let landmarks = vec![Landmark::new(0.5, 0.5, 0.0); POSE_LANDMARK_COUNT];
        let report = PostureReport::from_detection(Some(landmarks));
        assert!(report.verbose().starts_with("7 joints"));
    }
}
