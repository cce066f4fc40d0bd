// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Command-line interface modules.

/// CLI argument parsing.
pub mod args;
/// Logging utilities and macros.
pub mod logging;
/// The serve command (HTTP pipeline).
pub mod serve;
/// The watch command (live-feed pipeline).
pub mod watch;
