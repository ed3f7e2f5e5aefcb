//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod add;
mod config_gen;
mod list;
mod remove;
mod share;

pub use add::*;
pub use config_gen::*;
pub use list::*;
pub use remove::*;
pub use share::*;
