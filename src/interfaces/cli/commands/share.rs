//! Print share URL command

use crate::interfaces::cli::CliError;
use crate::services::LinkRegistry;
use crate::utils::share_url;

/// Prints the bare URL so it can be piped into other tools
pub fn share_link(registry: &LinkRegistry, id: &str, base: &str) -> Result<(), CliError> {
    match registry.get_by_id(id) {
        Some(link) => {
            println!("{}", share_url(base, &link.id));
            Ok(())
        }
        None => Err(CliError::CommandError(format!("Link not found: {}", id))),
    }
}
