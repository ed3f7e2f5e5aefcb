//! CLI interface module
//!
//! Link management from the terminal. Commands work on the same storage the
//! server uses, so changes show up on the next admin page load.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::get_config;
use crate::runtime::lifetime::startup::open_registry;
use crate::services::LinkRegistry;
use crate::utils::parse_view_path;
use commands::{add_link, config_generate, list_links, remove_link, share_link};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::TermitoonError> for CliError {
    fn from(err: crate::errors::TermitoonError) -> Self {
        CliError::StorageError(err.to_string())
    }
}

fn registry() -> Result<LinkRegistry, CliError> {
    let config = get_config();
    open_registry(&config)
        .map(|ctx| ctx.registry)
        .map_err(|e| CliError::StorageError(format!("{:#}", e)))
}

/// Base URL used when printing share links from the terminal
fn public_base() -> String {
    let config = get_config();
    match &config.server.public_url {
        Some(url) if !url.is_empty() => url.clone(),
        _ => format!("http://{}:{}", config.server.host, config.server.port),
    }
}

/// Accept either a bare id or a pasted share URL
fn link_id(arg: &str) -> String {
    parse_view_path(arg).unwrap_or_else(|| arg.to_string())
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        // Generate doesn't need storage
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),
        Commands::List => list_links(&registry()?, &public_base()),
        Commands::Add { title, url } => add_link(&registry()?, &title, &url, &public_base()),
        Commands::Remove { id } => remove_link(&registry()?, &link_id(&id)),
        Commands::Share { id } => share_link(&registry()?, &link_id(&id), &public_base()),
        Commands::Serve => Err(CliError::CommandError(
            "serve is not a CLI command".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formats() {
        let err = CliError::CommandError("Link not found: abc".to_string());
        assert_eq!(err.to_string(), "Command error: Link not found: abc");

        let err: CliError = crate::errors::TermitoonError::file_operation("disk full").into();
        assert!(matches!(err, CliError::StorageError(_)));
    }

    #[test]
    fn test_link_id_accepts_share_urls() {
        assert_eq!(link_id("lq2x9abc"), "lq2x9abc");
        assert_eq!(
            link_id("https://videos.example.com/view/lq2x9abc"),
            "lq2x9abc"
        );
        assert_eq!(link_id("http://127.0.0.1:8080/view/k3j4h5/"), "k3j4h5");
    }
}
