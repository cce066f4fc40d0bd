// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Model file download helpers.
//!
//! The default pose and face-mesh ONNX exports are fetched on first use when
//! the file is not already present next to the binary.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PostureError, Result};

/// Default body pose landmark model filename.
pub const DEFAULT_POSE_MODEL: &str = "pose_landmark.onnx";

/// Default face-mesh landmark model filename.
pub const DEFAULT_FACE_MODEL: &str = "face_landmark.onnx";

/// Base URL for default model downloads.
const ASSETS_URL: &str = "https://github.com/PINTO0309/PINTO_model_zoo/releases/download/v1.0";

/// Ensure a model file exists locally, downloading the default when absent.
///
/// A path that already exists is returned as-is; otherwise the filename is
/// fetched from the assets release.
///
/// # Errors
///
/// Returns an error if the download or the file write fails.
pub fn ensure_model(path: &str) -> Result<PathBuf> {
    let local = Path::new(path);
    if local.exists() {
        return Ok(local.to_path_buf());
    }

    let filename = local
        .file_name()
        .and_then(|f| f.to_str())
        .ok_or_else(|| PostureError::IoError(format!("Invalid model path: {path}")))?;

    let url = format!("{ASSETS_URL}/{filename}");
    tracing::info!("Downloading {filename} from {url}");

    let mut response = ureq::get(&url)
        .call()
        .map_err(|e| PostureError::ModelLoadError(format!("Failed to download {url}: {e}")))?
        .into_body();

    let bytes = response
        .read_to_vec()
        .map_err(|e| PostureError::ModelLoadError(format!("Failed to read {url}: {e}")))?;

    fs::write(local, bytes)?;
    Ok(local.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_file_is_returned_untouched() {
        // Cargo.toml always exists in the crate root during tests
        let path = ensure_model("Cargo.toml").unwrap();
        assert_eq!(path, PathBuf::from("Cargo.toml"));
    }

    #[test]
    fn test_invalid_path_is_rejected() {
        // No file name component and nothing to download
        assert!(ensure_model("/definitely-missing-dir/..").is_err());
    }
}
