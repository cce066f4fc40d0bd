// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use posture_inference::cli::args::{Cli, Commands};
use posture_inference::cli::{serve, watch};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run_server(&args),
        Commands::Watch(args) => watch::run_watch(&args),
    }
}
