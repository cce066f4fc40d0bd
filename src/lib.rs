// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Posture Inference Library
//!
//! Cycling-posture analysis from ONNX landmark models: per-frame joint angles
//! checked against fixed ideal ranges, served over HTTP or watched live from
//! a webcam.
//!
//! ## Features
//!
//! - **Joint angles** - Three-point interior angles from body landmarks,
//!   classified against per-joint tolerance bands (knee, ankle, back, arm)
//! - **ONNX Runtime** - Pre-trained pose and face-mesh landmark models run
//!   through `ort` with no Python dependency
//! - **HTTP boundary** - `POST /process_frame` multipart endpoint returning
//!   landmarks and angle checks as JSON, with permissive CORS and Swagger UI
//! - **Live pipeline** - Webcam capture, landmark overlay, and lip-gap smile
//!   detection in a display window
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use posture_inference::{DetectorConfig, LandmarkModel, PostureReport};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut model = LandmarkModel::load("pose_landmark.onnx", DetectorConfig::pose())?;
//!
//!     let frame = image::open("frame.jpg")?;
//!     let report = PostureReport::from_detection(model.detect(&frame)?);
//!
//!     for (joint, measurement) in &report.angles {
//!         println!(
//!             "{joint}: {:.1}° ({})",
//!             measurement.angle,
//!             if measurement.correct { "ok" } else { "adjust" }
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Frame-processing server on port 8000
//! posture-inference serve --model pose_landmark.onnx
//!
//! # Live webcam smile detection
//! posture-inference watch --camera 0
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`geometry`] | Three-point joint-angle math |
//! | [`landmarks`] | [`Landmark`] type and typed detector index tables |
//! | [`joints`] | Joint definitions, ideal ranges, classification |
//! | [`report`] | [`PostureReport`] per-frame output |
//! | [`model`] | [`LandmarkModel`] ONNX session wrapper |
//! | [`inference`] | [`DetectorConfig`] model geometry and runtime knobs |
//! | [`preprocessing`] | Frame to input tensor conversion |
//! | [`smile`] | Lip-gap smile heuristic |
//! | [`server`] | axum HTTP boundary |
//! | [`camera`] | Webcam capture |
//! | [`viewer`] | Display window |
//! | [`annotate`] | Landmark overlay drawing |
//! | [`error`] | Error types ([`PostureError`], [`Result`]) |

// Modules
pub mod annotate;
pub mod camera;
pub mod cli;
pub mod download;
pub mod error;
pub mod geometry;
pub mod inference;
pub mod joints;
pub mod landmarks;
pub mod model;
pub mod preprocessing;
pub mod report;
pub mod server;
pub mod smile;
pub mod viewer;

// Re-export main types for convenience
pub use error::{PostureError, Result};
pub use geometry::{Point2, joint_angle};
pub use inference::DetectorConfig;
pub use joints::{IdealRange, Joint, JointAngle, JointCategory, classify_joints};
pub use landmarks::{Landmark, PoseLandmark};
pub use model::LandmarkModel;
pub use report::PostureReport;
pub use smile::{SMILE_GAP_THRESHOLD, is_smiling, lip_gap};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // Version should be semver format like "0.1.0"
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "posture-inference");
    }
}
