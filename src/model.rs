// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Landmark model loading and inference.
//!
//! This module provides the [`LandmarkModel`] struct wrapping an ONNX Runtime
//! session over a pre-trained landmark model. The session requires `&mut` to
//! run, so a model instance is single-owner: callers serialize access (the
//! server holds it behind a mutex) rather than sharing it across simultaneous
//! inference calls.

use std::path::Path;

use image::DynamicImage;
use ort::session::Session;
use ort::value::TensorRef;

use crate::error::{PostureError, Result};
use crate::inference::DetectorConfig;
use crate::landmarks::Landmark;
use crate::preprocessing::preprocess_image;

/// Landmark detection model.
///
/// # Example
///
/// ```no_run
/// use posture_inference::{DetectorConfig, LandmarkModel};
///
/// let mut model = LandmarkModel::load("pose_landmark.onnx", DetectorConfig::pose())?;
/// let img = image::open("frame.jpg")?;
/// if let Some(landmarks) = model.detect(&img)? {
///     println!("{} landmarks", landmarks.len());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct LandmarkModel {
    /// ONNX Runtime session.
    session: Session,
    /// Model geometry and runtime configuration.
    config: DetectorConfig,
    /// Input tensor name.
    input_name: String,
    /// Output tensor names; the first is the landmark tensor, the second (if
    /// present) the presence score.
    output_names: Vec<String>,
    /// Whether the model has been warmed up.
    warmed_up: bool,
}

impl LandmarkModel {
    /// Load a landmark model from an ONNX file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ONNX model file.
    /// * `config` - Model geometry and runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the model file doesn't exist or can't be loaded.
    pub fn load<P: AsRef<Path>>(path: P, config: DetectorConfig) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PostureError::ModelLoadError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| {
                PostureError::ModelLoadError(format!("Failed to create session builder: {e}"))
            })?
            .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)
            .map_err(|e| {
                PostureError::ModelLoadError(format!("Failed to set optimization level: {e}"))
            })?
            .with_intra_threads(config.num_threads)
            .map_err(|e| {
                PostureError::ModelLoadError(format!("Failed to set intra-thread count: {e}"))
            })?
            .commit_from_file(path)
            .map_err(|e| PostureError::ModelLoadError(format!("Failed to load model: {e}")))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input".to_string());

        let output_names: Vec<String> = session.outputs.iter().map(|o| o.name.clone()).collect();

        Ok(Self {
            session,
            config,
            input_name,
            output_names,
            warmed_up: false,
        })
    }

    /// Warm up the model by running inference on a dummy input.
    ///
    /// Pre-allocates memory and optimizes the execution graph. Called
    /// automatically on the first detect.
    ///
    /// # Errors
    ///
    /// Returns an error if the warmup inference fails.
    pub fn warmup(&mut self) -> Result<()> {
        if self.warmed_up {
            return Ok(());
        }

        let (h, w) = self.config.input_size;
        let dummy = ndarray::Array4::<f32>::zeros((1, 3, h, w));
        let _ = self.run_inference(&dummy)?;

        self.warmed_up = true;
        Ok(())
    }

    /// Detect landmarks in a frame.
    ///
    /// # Arguments
    ///
    /// * `image` - The frame to analyze.
    ///
    /// # Returns
    ///
    /// `Ok(Some(landmarks))` with coordinates normalized to [0, 1] when a
    /// body/face is present, `Ok(None)` when the presence score is below the
    /// configured threshold. Absence is a normal outcome, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if inference fails or the model output has an
    /// unexpected shape.
    pub fn detect(&mut self, image: &DynamicImage) -> Result<Option<Vec<Landmark>>> {
        if !self.warmed_up {
            self.warmup()?;
        }

        let tensor = preprocess_image(image, self.config.input_size);
        let (landmark_data, presence) = self.run_inference(&tensor)?;

        if presence < self.config.presence_threshold {
            return Ok(None);
        }

        decode_landmarks(&self.config, &landmark_data).map(Some)
    }

    /// Run the ONNX session on a preprocessed tensor.
    ///
    /// Returns the flat landmark output and the presence score (1.0 when the
    /// model has no score output).
    fn run_inference(&mut self, input: &ndarray::Array4<f32>) -> Result<(Vec<f32>, f32)> {
        let input_contiguous = input.as_standard_layout();
        let input_tensor = TensorRef::from_array_view(&input_contiguous).map_err(|e| {
            PostureError::InferenceError(format!("Failed to create input tensor: {e}"))
        })?;

        let inputs = ort::inputs![&self.input_name => input_tensor];
        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| PostureError::InferenceError(format!("Inference failed: {e}")))?;

        let landmark_name = self
            .output_names
            .first()
            .ok_or_else(|| PostureError::InferenceError("Model has no outputs".to_string()))?;
        let landmark_output = outputs.get(landmark_name.as_str()).ok_or_else(|| {
            PostureError::InferenceError(format!("Output '{landmark_name}' not found"))
        })?;
        let (_, landmark_data) = landmark_output.try_extract_tensor::<f32>().map_err(|e| {
            PostureError::InferenceError(format!("Failed to extract landmarks: {e}"))
        })?;
        let landmark_vec = landmark_data.to_vec();

        let presence = match self.output_names.get(1) {
            Some(score_name) => {
                let score_output = outputs.get(score_name.as_str()).ok_or_else(|| {
                    PostureError::InferenceError(format!("Output '{score_name}' not found"))
                })?;
                let (_, score_data) = score_output.try_extract_tensor::<f32>().map_err(|e| {
                    PostureError::InferenceError(format!("Failed to extract score: {e}"))
                })?;
                score_data.first().copied().unwrap_or(0.0)
            }
            None => 1.0,
        };

        Ok((landmark_vec, presence))
    }

    /// The detector configuration.
    #[must_use]
    pub const fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// The model's input size (height, width).
    #[must_use]
    pub const fn input_size(&self) -> (usize, usize) {
        self.config.input_size
    }

    /// Number of landmarks the model emits.
    #[must_use]
    pub const fn num_landmarks(&self) -> usize {
        self.config.num_landmarks
    }
}

/// Decode a flat landmark tensor into normalized [`Landmark`]s.
///
/// Model coordinates are in input-pixel units and are divided by the input
/// size; `z` shares the `x` scale.
///
/// # Errors
///
/// Returns an error if the tensor is shorter than the configured topology.
pub fn decode_landmarks(config: &DetectorConfig, data: &[f32]) -> Result<Vec<Landmark>> {
    if data.len() < config.output_len() {
        return Err(PostureError::InferenceError(format!(
            "Landmark output too short: got {}, expected {}",
            data.len(),
            config.output_len()
        )));
    }

    #[allow(clippy::cast_precision_loss)]
    let (h, w) = (config.input_size.0 as f32, config.input_size.1 as f32);

    let landmarks = data
        .chunks_exact(config.values_per_landmark)
        .take(config.num_landmarks)
        .map(|chunk| Landmark::new(chunk[0] / w, chunk[1] / h, chunk[2] / w))
        .collect();

    Ok(landmarks)
}

impl std::fmt::Debug for LandmarkModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LandmarkModel")
            .field("input_size", &self.config.input_size)
            .field("num_landmarks", &self.config.num_landmarks)
            .field("input_name", &self.input_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::DetectorConfig;

    #[test]
    fn test_model_not_found() {
        let result = LandmarkModel::load("nonexistent.onnx", DetectorConfig::pose());
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            PostureError::ModelLoadError(_)
        ));
    }

    #[test]
    fn test_decode_landmarks_normalizes() {
        let config = DetectorConfig::pose();
        let mut data = vec![0.0; config.output_len()];
        // First landmark at pixel (128, 64), z = 32
        data[0] = 128.0;
        data[1] = 64.0;
        data[2] = 32.0;

        let landmarks = decode_landmarks(&config, &data).unwrap();
        assert_eq!(landmarks.len(), 33);
        assert!((landmarks[0].x - 0.5).abs() < 1e-6);
        assert!((landmarks[0].y - 0.25).abs() < 1e-6);
        assert!((landmarks[0].z - 0.125).abs() < 1e-6);
    }

    #[test]
    fn test_decode_landmarks_rejects_short_output() {
        let config = DetectorConfig::pose();
        let data = vec![0.0; 10];
        assert!(decode_landmarks(&config, &data).is_err());
    }
}
