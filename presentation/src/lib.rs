//! Presentation layer for byzgen
//!
//! This crate contains CLI definitions, output formatters
//! and the streaming decision printer.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, SelfVoteArg};
pub use config::{OutputConfig, RunSettings};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::DecisionPrinter;
