//! Remove link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkRegistry;

pub fn remove_link(registry: &LinkRegistry, id: &str) -> Result<(), CliError> {
    if registry.get_by_id(id).is_none() {
        return Err(CliError::CommandError(format!("Link not found: {}", id)));
    }

    registry.delete(id)?;
    println!("{} Deleted link: {}", "✓".bold().green(), id.cyan());
    Ok(())
}
