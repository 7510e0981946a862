//! Presentation-level configuration
//!
//! Effective run settings after CLI flags are layered over file values.

use crate::cli::commands::Cli;
use byzgen_application::SimulationParams;
use byzgen_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text" or "json"
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Print an agreement summary in text mode
    pub summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            summary: false,
        }
    }
}

impl OutputConfig {
    /// Apply CLI flags on top of file-derived settings.
    ///
    /// Boolean flags can only switch a behavior on (`--summary`) or off
    /// (`--no-color`); absent flags keep the file value.
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(format) = cli.output {
            self.format = format.into();
        }
        if cli.summary {
            self.summary = true;
        }
        if cli.no_color {
            self.color = false;
        }
        self
    }
}

/// Everything a run is configured with, file values first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSettings {
    pub params: SimulationParams,
    pub output: OutputConfig,
    /// JSONL relay transcript destination; `None` disables it
    pub trace: Option<PathBuf>,
}

impl RunSettings {
    /// Apply CLI flags on top of file-derived settings.
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(symbol) = cli.loyal_symbol {
            self.params = self.params.with_loyal_symbol(symbol);
        }
        if let Some(rule) = cli.self_vote {
            self.params = self.params.with_self_vote(rule.into());
        }
        if let Some(path) = &cli.trace {
            self.trace = Some(path.clone());
        }
        self.output = self.output.with_cli_overrides(cli);
        self
    }
}
