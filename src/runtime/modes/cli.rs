//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use crate::cli::Commands;
use crate::interfaces::cli::{CliError, run_cli_command};

/// Run CLI mode
///
/// `serve` never reaches here; mode detection routes it to the server.
pub async fn run_cli(command: Commands) -> Result<(), CliError> {
    if let Commands::Serve = command {
        return Err(CliError::CommandError(
            "serve must be started in server mode".to_string(),
        ));
    }
    run_cli_command(command).await
}
