//! Termitoon - a tiny video link registry
//!
//! An admin keeps a list of titled video URLs behind a shared password and
//! hands out share links. Opening a share link sends iOS and Android visitors
//! straight into the VLC player and offers desktop visitors manual buttons.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line link management
//!
//! # Architecture
//! - `storage`: Key-value storage backends (file, memory)
//! - `services`: Link registry, admin gate, notifications, redirect logic
//! - `api`: HTTP handlers, sessions and page rendering
//! - `interfaces`: Command-line interface
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
