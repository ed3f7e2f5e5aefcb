//! Mode routing
//!
//! - Server mode (HTTP server for the admin and view pages)
//! - CLI mode (Command-line link management)
//!
//! The mode selection is based on command-line arguments and feature flags.

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "server")]
pub use server::run_server;

#[cfg(feature = "cli")]
pub use cli::run_cli;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "server")]
    Server,
    #[cfg(feature = "cli")]
    Cli,
    Unknown,
}

/// Detect which mode to run from the parsed subcommand
///
/// # Mode Detection Logic
/// 1. No subcommand, or `serve` -> Server mode
/// 2. Any other subcommand and CLI feature enabled -> CLI mode
/// 3. Otherwise -> Unknown
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    #[cfg(feature = "server")]
    if matches!(command, None | Some(Commands::Serve)) {
        return Mode::Server;
    }

    #[cfg(feature = "cli")]
    if command.is_some() {
        return Mode::Cli;
    }

    Mode::Unknown
}
