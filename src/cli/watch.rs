// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! The watch command: live webcam face landmarks with smile detection.

use std::process;

use crate::annotate::{LANDMARK_COLOR, SMILE_COLOR, annotate_landmarks};
use crate::camera::CameraSource;
use crate::cli::args::WatchArgs;
use crate::cli::logging;
use crate::download::ensure_model;
use crate::smile::is_smiling;
use crate::viewer::Viewer;
use crate::{DetectorConfig, LandmarkModel, error, info, verbose};

/// Run the live loop until the window is closed or a frame read fails.
pub fn run_watch(args: &WatchArgs) {
    logging::set_verbose(args.verbose);

    let model_path = match ensure_model(&args.model) {
        Ok(p) => p,
        Err(e) => {
            error!("Error fetching model: {e}");
            process::exit(1);
        }
    };

    let config = DetectorConfig::face_mesh().with_presence_threshold(args.threshold);
    let mut model = match LandmarkModel::load(&model_path, config) {
        Ok(m) => m,
        Err(e) => {
            error!("Error loading model: {e}");
            process::exit(1);
        }
    };

    let mut camera = match CameraSource::open(args.camera) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let (width, height) = camera.resolution();
    let mut viewer = match Viewer::new("Face Landmarks", width as usize, height as usize) {
        Ok(v) => v,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    info!("Watching camera {} ({}x{}), press Q or Esc to quit", args.camera, width, height);

    loop {
        // A failed capture ends the loop; there is no retry
        let frame = match camera.next_frame() {
            Ok(f) => f,
            Err(e) => {
                error!("{e}");
                break;
            }
        };

        let detection = match model.detect(&frame) {
            Ok(d) => d,
            Err(e) => {
                error!("{e}");
                break;
            }
        };

        let annotated = match detection {
            Some(landmarks) => {
                let smiling = is_smiling(&landmarks) == Some(true);
                if smiling {
                    verbose!("Smile detected!");
                }
                let color = if smiling { SMILE_COLOR } else { LANDMARK_COLOR };
                annotate_landmarks(&frame, &landmarks, color)
            }
            None => frame.to_rgb8(),
        };

        match viewer.update(&annotated) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                error!("{e}");
                break;
            }
        }
    }
}
