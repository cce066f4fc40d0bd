// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the posture inference library.

use posture_inference::{
    DetectorConfig, Joint, JointCategory, Landmark, Point2, PoseLandmark, PostureReport,
    classify_joints, is_smiling, joint_angle, lip_gap,
};

fn neutral_pose() -> Vec<Landmark> {
    vec![Landmark { x: 0.5, y: 0.5, z: 0.0 }; 33]
}

fn place(landmarks: &mut [Landmark], lm: PoseLandmark, x: f32, y: f32) {
    landmarks[lm.index()] = Landmark { x, y, z: 0.0 };
}

#[test]
fn test_collinear_points_measure_180() {
    let angle = joint_angle(
        Point2::new(0.2, 0.5),
        Point2::new(0.5, 0.5),
        Point2::new(0.9, 0.5),
    );
    assert!((angle - 180.0).abs() < 1e-3);
}

#[test]
fn test_right_angle_symmetric() {
    let a = Point2::new(0.5, 0.2);
    let b = Point2::new(0.5, 0.5);
    let c = Point2::new(0.8, 0.5);
    assert!((joint_angle(a, b, c) - 90.0).abs() < 1e-3);
    assert!((joint_angle(c, b, a) - 90.0).abs() < 1e-3);
}

#[test]
fn test_right_knee_synthetic_frame() {
    // Right hip (0.5, 0.5), right knee (0.5, 0.6), right ankle (0.6, 0.6):
    // 90° at the knee, inside the [70, 110] band
    let mut landmarks = neutral_pose();
    place(&mut landmarks, PoseLandmark::RightHip, 0.5, 0.5);
    place(&mut landmarks, PoseLandmark::RightKnee, 0.5, 0.6);
    place(&mut landmarks, PoseLandmark::RightAnkle, 0.6, 0.6);

    let report = PostureReport::from_detection(Some(landmarks));
    let knee = &report.angles["right_knee"];
    assert!((knee.angle - 90.0).abs() < 1e-3);
    assert!(knee.correct);
}

#[test]
fn test_band_boundaries_are_correct() {
    for joint in Joint::ALL {
        let range = joint.category().ideal_range();
        assert!(range.contains(range.min));
        assert!(range.contains(range.max));
        assert!(!range.contains(range.min - 0.01));
        assert!(!range.contains(range.max + 0.01));
    }
}

#[test]
fn test_ideal_ranges_match_coaching_table() {
    assert_eq!(JointCategory::Knee.ideal_range().min, 70.0);
    assert_eq!(JointCategory::Knee.ideal_range().max, 110.0);
    assert_eq!(JointCategory::Ankle.ideal_range().min, 80.0);
    assert_eq!(JointCategory::Ankle.ideal_range().max, 110.0);
    assert_eq!(JointCategory::Back.ideal_range().min, 40.0);
    assert_eq!(JointCategory::Back.ideal_range().max, 60.0);
    assert_eq!(JointCategory::Arm.ideal_range().min, 150.0);
    assert_eq!(JointCategory::Arm.ideal_range().max, 175.0);
}

#[test]
fn test_empty_detection_serializes_empty() {
    let report = PostureReport::from_detection(None);
    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(json, r#"{"landmarks":[],"angles":{}}"#);
}

#[test]
fn test_truncated_detection_omits_joints() {
    // Only the upper body is available: no hips, knees, ankles or feet
    let landmarks = vec![Landmark { x: 0.5, y: 0.5, z: 0.0 }; 23];
    let angles = classify_joints(&landmarks);

    assert!(angles.contains_key("right_arm"));
    assert!(angles.contains_key("left_arm"));
    assert!(!angles.contains_key("right_knee"));
    assert!(!angles.contains_key("left_knee"));
    assert!(!angles.contains_key("back"));
    assert!(!angles.contains_key("right_ankle"));
}

#[test]
fn test_report_json_shape() {
    let mut landmarks = neutral_pose();
    place(&mut landmarks, PoseLandmark::RightHip, 0.5, 0.5);
    place(&mut landmarks, PoseLandmark::RightKnee, 0.5, 0.6);
    place(&mut landmarks, PoseLandmark::RightAnkle, 0.6, 0.6);

    let report = PostureReport::from_detection(Some(landmarks));
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["landmarks"].as_array().unwrap().len(), 33);
    assert!(json["landmarks"][0]["x"].is_number());
    assert!(json["landmarks"][0]["y"].is_number());
    assert!(json["landmarks"][0]["z"].is_number());
    assert!(json["angles"]["right_knee"]["angle"].is_number());
    assert!(json["angles"]["right_knee"]["correct"].is_boolean());
}

#[test]
fn test_smile_thresholds() {
    let mut face = vec![Landmark { x: 0.5, y: 0.5, z: 0.0 }; 468];
    // gap 0.03 > 0.02: flagged
    face[13] = Landmark { x: 0.5, y: 0.47, z: 0.0 };
    face[14] = Landmark { x: 0.5, y: 0.50, z: 0.0 };
    assert!((lip_gap(&face).unwrap() - 0.03).abs() < 1e-6);
    assert_eq!(is_smiling(&face), Some(true));

    // gap 0.01: not flagged
    face[13] = Landmark { x: 0.5, y: 0.49, z: 0.0 };
    assert_eq!(is_smiling(&face), Some(false));
}

#[test]
fn test_detector_presets_cover_required_indices() {
    let pose = DetectorConfig::pose();
    assert!(pose.num_landmarks > PoseLandmark::RightFootIndex.index());

    let face = DetectorConfig::face_mesh();
    assert!(face.num_landmarks > 14);
}
