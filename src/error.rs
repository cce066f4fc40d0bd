// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the posture inference library.

use std::fmt;

/// Result type alias for posture inference operations.
pub type Result<T> = std::result::Result<T, PostureError>;

/// Main error type for the posture inference library.
#[derive(Debug)]
pub enum PostureError {
    /// Error loading the ONNX landmark model.
    ModelLoadError(String),
    /// Error during model inference.
    InferenceError(String),
    /// Error decoding or processing images.
    ImageError(String),
    /// Camera capture error.
    CameraError(String),
    /// Display window error.
    ViewerError(String),
    /// HTTP server error.
    ServerError(String),
    /// IO error (file not found, permission denied, etc.).
    IoError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for PostureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelLoadError(msg) => write!(f, "Model load error: {msg}"),
            Self::InferenceError(msg) => write!(f, "Inference error: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::CameraError(msg) => write!(f, "Camera error: {msg}"),
            Self::ViewerError(msg) => write!(f, "Viewer error: {msg}"),
            Self::ServerError(msg) => write!(f, "Server error: {msg}"),
            Self::IoError(msg) => write!(f, "IO error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for PostureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PostureError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for PostureError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}
