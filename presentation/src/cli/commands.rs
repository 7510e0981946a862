//! CLI command definitions

use byzgen_domain::SelfVote;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for simulation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per general as decisions arrive
    Text,
    /// The full simulation report as JSON
    Json,
}

impl From<OutputFormat> for byzgen_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => byzgen_domain::OutputFormat::Text,
            OutputFormat::Json => byzgen_domain::OutputFormat::Json,
        }
    }
}

/// Majority rule selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelfVoteArg {
    /// A node's own report votes alongside its children
    Counted,
    /// Interior nodes are decided by their children alone
    Excluded,
}

impl From<SelfVoteArg> for SelfVote {
    fn from(arg: SelfVoteArg) -> Self {
        match arg {
            SelfVoteArg::Counted => SelfVote::Counted,
            SelfVoteArg::Excluded => SelfVote::Excluded,
        }
    }
}

/// CLI arguments for byzgen
#[derive(Parser, Debug)]
#[command(name = "byzgen")]
#[command(author, version, about = "Byzantine Generals simulator - Oral Messages OM(m)")]
#[command(long_about = r#"
byzgen simulates Lamport's Oral Messages algorithm OM(m).

Every general runs as its own task. The commander (general 0) sends its
order, lieutenants relay what they hear for m rounds, then every general
decides by recursive majority over the reports it collected.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./byzgen.toml       Project-level config
3. ~/.config/byzgen/config.toml   Global config

Example:
  byzgen LLLT ATTACK 1
  byzgen TLLL RETREAT 1 --summary
  byzgen LLLLLLT ATTACK 2 -o json --trace run.jsonl
"#)]
pub struct Cli {
    /// One character per general; the loyal symbol marks loyal, anything else a traitor
    #[arg(value_name = "LOYALTY", required_unless_present = "show_config")]
    pub loyalty: Option<String>,

    /// The commander's order: ATTACK or RETREAT
    #[arg(value_name = "ORDER", required_unless_present = "show_config")]
    pub order: Option<String>,

    /// Number of relay rounds (m)
    #[arg(value_name = "M", required_unless_present = "show_config")]
    pub rounds: Option<usize>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print an agreement summary after the decision lines
    #[arg(long)]
    pub summary: bool,

    /// Character marking a loyal general (overrides config)
    #[arg(long, value_name = "CHAR")]
    pub loyal_symbol: Option<char>,

    /// Majority rule for report trees (overrides config)
    #[arg(long, value_enum, value_name = "RULE")]
    pub self_vote: Option<SelfVoteArg>,

    /// Write a JSONL transcript of every relay event
    #[arg(long, value_name = "PATH")]
    pub trace: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// The `<loyalty> <order> <m>` triple, present unless `--show-config` was given.
    pub fn positionals(&self) -> Option<(&str, &str, usize)> {
        Some((self.loyalty.as_deref()?, self.order.as_deref()?, self.rounds?))
    }
}
