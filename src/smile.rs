// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Smile heuristic for the live face-mesh pipeline.
//!
//! Purely per-frame: the vertical separation of the two lip midpoints against
//! a fixed threshold. No hysteresis, no temporal debouncing.

use crate::landmarks::{FACE_LOWER_LIP, FACE_UPPER_LIP, Landmark};

/// Lip-gap threshold in normalized image units.
pub const SMILE_GAP_THRESHOLD: f32 = 0.02;

/// Vertical gap between the lower and upper lip midpoints.
///
/// Returns `None` when the detection result doesn't contain both lip
/// landmarks.
#[must_use]
pub fn lip_gap(landmarks: &[Landmark]) -> Option<f32> {
    let upper = landmarks.get(FACE_UPPER_LIP)?;
    let lower = landmarks.get(FACE_LOWER_LIP)?;
    Some(lower.y - upper.y)
}

/// Check whether the lip gap crosses the smile threshold.
///
/// Returns `None` when the lip landmarks are unavailable.
#[must_use]
pub fn is_smiling(landmarks: &[Landmark]) -> Option<bool> {
    lip_gap(landmarks).map(|gap| gap > SMILE_GAP_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_with_lips(upper_y: f32, lower_y: f32) -> Vec<Landmark> {
        let mut landmarks = vec![Landmark::new(0.5, 0.5, 0.0); 20];
        landmarks[FACE_UPPER_LIP] = Landmark::new(0.5, upper_y, 0.0);
        landmarks[FACE_LOWER_LIP] = Landmark::new(0.5, lower_y, 0.0);
        landmarks
    }

    #[test]
    fn test_open_lips_flag_smile() {
        // gap 0.03 > 0.02
        let landmarks = face_with_lips(0.47, 0.50);
        assert!((lip_gap(&landmarks).unwrap() - 0.03).abs() < 1e-6);
        assert_eq!(is_smiling(&landmarks), Some(true));
    }

    #[test]
    fn test_closed_lips_do_not_flag() {
        // gap 0.01 <= 0.02
        let landmarks = face_with_lips(0.49, 0.50);
        assert_eq!(is_smiling(&landmarks), Some(false));
    }

    #[test]
    fn test_missing_lip_landmarks() {
        let landmarks = vec![Landmark::new(0.5, 0.5, 0.0); FACE_LOWER_LIP];
        assert!(lip_gap(&landmarks).is_none());
        assert!(is_smiling(&landmarks).is_none());
    }
}
