// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

use crate::download::{DEFAULT_FACE_MODEL, DEFAULT_POSE_MODEL};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Examples:
    posture-inference serve
    posture-inference serve --model pose_landmark.onnx --port 8000
    posture-inference watch --camera 0
    posture-inference watch --model face_landmark.onnx --threshold 0.6"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the frame-processing HTTP server
    Serve(ServeArgs),
    /// Watch the webcam with live face landmarks and smile detection
    Watch(WatchArgs),
}

/// Arguments for the serve command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to the pose landmark ONNX model
    #[arg(short, long, default_value = DEFAULT_POSE_MODEL)]
    pub model: String,

    /// Host address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Minimum presence score for a pose detection
    #[arg(long, default_value_t = 0.5)]
    pub threshold: f32,
}

/// Arguments for the watch command.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Path to the face-mesh landmark ONNX model
    #[arg(short, long, default_value = DEFAULT_FACE_MODEL)]
    pub model: String,

    /// Camera device index
    #[arg(short, long, default_value_t = 0)]
    pub camera: u32,

    /// Minimum presence score for a face detection
    #[arg(long, default_value_t = 0.5)]
    pub threshold: f32,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}
