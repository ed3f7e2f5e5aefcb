//! List links command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkRegistry;
use crate::utils::share_url;

pub fn list_links(registry: &LinkRegistry, base: &str) -> Result<(), CliError> {
    let links = registry.list();

    if links.is_empty() {
        println!("{} No links added yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Link list (newest first):".bold().green());
    println!();
    for link in &links {
        println!(
            "  {} {} -> {}",
            link.id.cyan(),
            link.title.bold(),
            link.url.blue().underline()
        );
        println!(
            "    {} {}",
            format!("added {}", link.created_at.format("%Y-%m-%d %H:%M:%S UTC"))
                .dimmed()
                .yellow(),
            share_url(base, &link.id).dimmed()
        );
    }
    println!();
    println!(
        "{} Total {} links",
        "ℹ".bold().blue(),
        links.len().to_string().green()
    );
    Ok(())
}
