//! Add link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkRegistry;
use crate::utils::share_url;

pub fn add_link(
    registry: &LinkRegistry,
    title: &str,
    url: &str,
    base: &str,
) -> Result<(), CliError> {
    let Some(link) = registry.add(title, url)? else {
        return Err(CliError::ParseError(
            "title and url must both be non-empty".to_string(),
        ));
    };

    println!(
        "{} Added link: {} {} -> {}",
        "✓".bold().green(),
        link.id.cyan(),
        link.title.bold(),
        link.url.blue().underline()
    );
    println!(
        "  {} {}",
        "Share:".dimmed(),
        share_url(base, &link.id).magenta()
    );
    Ok(())
}
