//! Simulation parameters: how inputs are interpreted and trees resolved.
//!
//! [`SimulationParams`] groups the settings that are not part of the
//! `<loyalty> <order> <m>` triple itself. They come from configuration files
//! or CLI flags and are fixed for the duration of a run.

use byzgen_domain::{DEFAULT_LOYAL_SYMBOL, SelfVote};
use serde::{Deserialize, Serialize};

/// Parameters shared by every general of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Character marking a loyal general in the loyalty string.
    pub loyal_symbol: char,
    /// Whether a node's own report votes in its majority.
    pub self_vote: SelfVote,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            loyal_symbol: DEFAULT_LOYAL_SYMBOL,
            self_vote: SelfVote::default(),
        }
    }
}

impl SimulationParams {
    // ==================== Builder Methods ====================

    pub fn with_loyal_symbol(mut self, symbol: char) -> Self {
        self.loyal_symbol = symbol;
        self
    }

    pub fn with_self_vote(mut self, rule: SelfVote) -> Self {
        self.self_vote = rule;
        self
    }
}
