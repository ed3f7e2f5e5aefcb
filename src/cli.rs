//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for termitoon using clap's derive macros.

use clap::{Parser, Subcommand};

/// Termitoon - share video links that open in the right player
#[derive(Parser)]
#[command(name = "termitoon")]
#[command(version)]
#[command(about = "A tiny video link registry with player-aware share links", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (default when no command is given)
    Serve,

    /// List all links, newest first
    List,

    /// Add a link
    Add {
        /// Display title
        title: String,

        /// Video URL
        url: String,
    },

    /// Remove a link by id
    Remove {
        /// Link id or share URL
        id: String,
    },

    /// Print the share URL of a link
    Share {
        /// Link id or share URL
        id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["termitoon", "add", "Zootopia", "http://x.test/a.mp4"])
            .expect("add should parse");
        match cli.command {
            Some(Commands::Add { title, url }) => {
                assert_eq!(title, "Zootopia");
                assert_eq!(url, "http://x.test/a.mp4");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["termitoon", "list", "--config", "alt.toml"])
            .expect("list should parse");
        assert_eq!(cli.config.as_deref(), Some("alt.toml"));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_add_requires_both_fields() {
        assert!(Cli::try_parse_from(["termitoon", "add", "only-title"]).is_err());
    }
}
