//! Configuration file loading for byzgen
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BYZGEN_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./byzgen.toml` or `./.byzgen.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/byzgen/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileOutputConfig, FileOutputFormat, FileSimulationConfig,
    FileTraceConfig,
};
pub use loader::ConfigLoader;
