use clap::Parser;
use colored::Colorize;

use termitoon::cli::Cli;
use termitoon::config::{StaticConfig, get_config, init_config, update_config};
use termitoon::runtime::modes::{self, Mode};
use termitoon::system::{init_cli_logging, init_logging};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 配置加载：--config 优先，否则 config.toml
    match &cli.config {
        Some(path) => update_config(StaticConfig::load_from(path)),
        None => init_config(),
    }

    match modes::detect_mode(cli.command.as_ref()) {
        #[cfg(feature = "server")]
        Mode::Server => {
            let config = get_config();
            let _guard = match init_logging(&config.logging) {
                Ok(guard) => guard,
                Err(e) => {
                    eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = modes::run_server().await {
                tracing::error!("Server exited with error: {:#}", e);
                eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
                std::process::exit(1);
            }
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                return Ok(());
            };
            if let Err(e) = init_cli_logging() {
                eprintln!("{} {:#}", "[WARN]".yellow().bold(), e);
            }
            if let Err(e) = modes::run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        Mode::Unknown => {
            eprintln!("No execution mode available; rebuild with the server or cli feature");
            std::process::exit(1);
        }
    }

    Ok(())
}
