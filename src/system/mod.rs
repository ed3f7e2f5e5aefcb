//! System-level modules
//!
//! - Logging initialization

pub mod logging;

pub use logging::{init_cli_logging, init_logging};
