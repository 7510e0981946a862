//! Output format value object

use serde::{Deserialize, Serialize};

/// How simulation results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per general as each decides (default)
    #[default]
    Text,
    /// The full report as JSON once every general has decided
    Json,
}
