//! User interfaces beyond HTTP

#[cfg(feature = "cli")]
pub mod cli;
