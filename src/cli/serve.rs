// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! The serve command: frame-processing HTTP server.

use std::process;
use std::sync::Arc;

use crate::cli::args::ServeArgs;
use crate::download::ensure_model;
use crate::server::{AppState, serve};
use crate::{DetectorConfig, LandmarkModel, error, info};

/// Load the pose model and run the HTTP server until stopped.
pub fn run_server(args: &ServeArgs) {
    tracing_subscriber::fmt::init();

    let model_path = match ensure_model(&args.model) {
        Ok(p) => p,
        Err(e) => {
            error!("Error fetching model: {e}");
            process::exit(1);
        }
    };

    let config = DetectorConfig::pose().with_presence_threshold(args.threshold);
    let model = match LandmarkModel::load(&model_path, config) {
        Ok(m) => m,
        Err(e) => {
            error!("Error loading model: {e}");
            process::exit(1);
        }
    };

    info!(
        "Model loaded: {} ({} landmarks, {}x{} input)",
        model_path.display(),
        model.num_landmarks(),
        model.input_size().1,
        model.input_size().0
    );

    let state = Arc::new(AppState::new(
        model,
        model_path.to_string_lossy().to_string(),
    ));
    let addr = format!("{}:{}", args.host, args.port);
    info!("Swagger UI available at http://{addr}/swagger-ui/");

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to start runtime: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(serve(state, &addr)) {
        error!("{e}");
        process::exit(1);
    }
}
