//! Infrastructure layer for byzgen
//!
//! This crate contains the adapters behind the application ports and the
//! configuration file handling:
//!
//! - [`config`]: figment-based TOML/env configuration loading
//! - [`logging`]: JSONL relay transcript writer

pub mod config;
pub mod logging;

pub use config::{ConfigIssue, ConfigLoader, FileConfig};
pub use logging::JsonlRelayLogger;
