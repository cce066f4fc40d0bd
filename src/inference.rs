// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Detector configuration.
//!
//! This module defines the [`DetectorConfig`] struct, which describes the
//! geometry of a landmark model (input size, landmark count, values per
//! landmark) and the runtime knobs for inference.

/// Configuration for a landmark detector.
///
/// Uses a builder pattern for convenient construction. The [`pose`] and
/// [`face_mesh`] presets match the bundled model topologies.
///
/// [`pose`]: DetectorConfig::pose
/// [`face_mesh`]: DetectorConfig::face_mesh
///
/// # Example
///
/// ```rust
/// use posture_inference::DetectorConfig;
///
/// let config = DetectorConfig::pose()
///     .with_presence_threshold(0.6)
///     .with_threads(4);
/// ```
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Model input size (height, width).
    pub input_size: (usize, usize),
    /// Number of landmarks the model emits.
    pub num_landmarks: usize,
    /// Values per landmark in the output tensor (x, y, z [, visibility,
    /// presence]).
    pub values_per_landmark: usize,
    /// Minimum presence score for a detection to count; below this the frame
    /// is reported as containing no body/face.
    pub presence_threshold: f32,
    /// Number of intra-op threads for ONNX Runtime.
    /// Setting this to `0` allows ONNX Runtime to choose the optimal number.
    pub num_threads: usize,
}

impl DetectorConfig {
    /// Configuration for the 33-point body pose model (256x256 input, five
    /// values per landmark).
    #[must_use]
    pub const fn pose() -> Self {
        Self {
            input_size: (256, 256),
            num_landmarks: crate::landmarks::POSE_LANDMARK_COUNT,
            values_per_landmark: 5,
            presence_threshold: 0.5,
            num_threads: 0,
        }
    }

    /// Configuration for the 468-point face-mesh model (192x192 input, three
    /// values per landmark).
    #[must_use]
    pub const fn face_mesh() -> Self {
        Self {
            input_size: (192, 192),
            num_landmarks: crate::landmarks::FACE_LANDMARK_COUNT,
            values_per_landmark: 3,
            presence_threshold: 0.5,
            num_threads: 0,
        }
    }

    /// Set the presence threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Minimum presence score (0.0 to 1.0).
    #[must_use]
    pub const fn with_presence_threshold(mut self, threshold: f32) -> Self {
        self.presence_threshold = threshold;
        self
    }

    /// Set the number of intra-op threads. `0` lets ONNX Runtime decide.
    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads;
        self
    }

    /// Expected length of the flat landmark output tensor.
    #[must_use]
    pub const fn output_len(&self) -> usize {
        self.num_landmarks * self.values_per_landmark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_preset() {
        let config = DetectorConfig::pose();
        assert_eq!(config.input_size, (256, 256));
        assert_eq!(config.num_landmarks, 33);
        assert_eq!(config.output_len(), 165);
        assert!((config.presence_threshold - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_face_mesh_preset() {
        let config = DetectorConfig::face_mesh();
        assert_eq!(config.input_size, (192, 192));
        assert_eq!(config.num_landmarks, 468);
        assert_eq!(config.output_len(), 1404);
    }

    #[test]
    fn test_builder() {
        let config = DetectorConfig::pose()
            .with_presence_threshold(0.7)
            .with_threads(8);
        assert!((config.presence_threshold - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.num_threads, 8);
    }
}
