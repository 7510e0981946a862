//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod simulation;
mod trace;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use simulation::FileSimulationConfig;
pub use trace::FileTraceConfig;

use serde::{Deserialize, Serialize};

/// A configuration value that could not be used; the default applies instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted key, e.g. `simulation.self_vote`
    pub field: String,
    /// The rejected raw value
    pub value: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Simulation settings
    pub simulation: FileSimulationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Relay transcript settings
    pub trace: FileTraceConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.simulation.parse_loyal_symbol().1);
        issues.extend(self.simulation.parse_self_vote().1);
        issues
    }
}
