//! Simulation configuration from TOML (`[simulation]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [simulation]
//! loyal_symbol = "L"      # any other character marks a traitor
//! self_vote = "counted"   # or "excluded"
//! ```

use super::ConfigIssue;
use byzgen_application::SimulationParams;
use byzgen_domain::{DEFAULT_LOYAL_SYMBOL, SelfVote};
use serde::{Deserialize, Serialize};

/// Raw simulation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulationConfig {
    /// Single character marking a loyal general
    pub loyal_symbol: String,
    /// Self-vote rule: "counted" or "excluded"
    pub self_vote: String,
}

impl Default for FileSimulationConfig {
    fn default() -> Self {
        Self {
            loyal_symbol: DEFAULT_LOYAL_SYMBOL.to_string(),
            self_vote: SelfVote::default().to_string(),
        }
    }
}

impl FileSimulationConfig {
    /// Parse loyal_symbol into a single character, falling back to 'L'.
    pub fn parse_loyal_symbol(&self) -> (char, Vec<ConfigIssue>) {
        let mut chars = self.loyal_symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => (c, vec![]),
            _ => {
                let issue = ConfigIssue {
                    field: "simulation.loyal_symbol".to_string(),
                    value: self.loyal_symbol.clone(),
                    message: format!(
                        "simulation.loyal_symbol: '{}' is not a single character, falling back to '{}'",
                        self.loyal_symbol, DEFAULT_LOYAL_SYMBOL
                    ),
                };
                (DEFAULT_LOYAL_SYMBOL, vec![issue])
            }
        }
    }

    /// Parse self_vote string into SelfVote enum, returning warnings on failure.
    ///
    /// Accepts: "counted", "excluded" (case-insensitive)
    pub fn parse_self_vote(&self) -> (SelfVote, Vec<ConfigIssue>) {
        match self.self_vote.parse::<SelfVote>() {
            Ok(rule) => (rule, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    field: "simulation.self_vote".to_string(),
                    value: self.self_vote.clone(),
                    message: format!(
                        "simulation.self_vote: unknown value '{}', falling back to 'counted'",
                        self.self_vote
                    ),
                };
                (SelfVote::default(), vec![issue])
            }
        }
    }

    /// Build application parameters. Invalid values fall back to defaults;
    /// [`FileConfig::validate`](super::FileConfig::validate) reports them.
    pub fn to_params(&self) -> SimulationParams {
        SimulationParams::default()
            .with_loyal_symbol(self.parse_loyal_symbol().0)
            .with_self_vote(self.parse_self_vote().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_config_default() {
        let config = FileSimulationConfig::default();
        assert_eq!(config.loyal_symbol, "L");
        assert_eq!(config.self_vote, "counted");

        assert_eq!(config.to_params(), SimulationParams::default());
    }

    #[test]
    fn test_custom_values() {
        let config = FileSimulationConfig {
            loyal_symbol: "+".to_string(),
            self_vote: "excluded".to_string(),
        };
        let params = config.to_params();
        assert_eq!(params.loyal_symbol, '+');
        assert_eq!(params.self_vote, SelfVote::Excluded);
    }

    #[test]
    fn test_multi_char_symbol_falls_back() {
        let config = FileSimulationConfig {
            loyal_symbol: "LL".to_string(),
            ..Default::default()
        };
        let (symbol, issues) = config.parse_loyal_symbol();
        assert_eq!(symbol, 'L');
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "simulation.loyal_symbol");
        assert_eq!(config.to_params().loyal_symbol, 'L');
    }

    #[test]
    fn test_empty_symbol_falls_back() {
        let config = FileSimulationConfig {
            loyal_symbol: String::new(),
            ..Default::default()
        };
        assert_eq!(config.parse_loyal_symbol().1.len(), 1);
    }

    #[test]
    fn test_unknown_self_vote_falls_back() {
        let config = FileSimulationConfig {
            self_vote: "sometimes".to_string(),
            ..Default::default()
        };
        let (rule, issues) = config.parse_self_vote();
        assert_eq!(rule, SelfVote::Counted);
        assert_eq!(issues[0].value, "sometimes");
        assert!(issues[0].message.contains("sometimes"));
    }

    #[test]
    fn test_aliases_are_not_accepted() {
        for value in ["count", "include", "included", "exclude"] {
            let config = FileSimulationConfig {
                self_vote: value.to_string(),
                ..Default::default()
            };
            assert_eq!(config.parse_self_vote().1.len(), 1, "{value}");
        }
    }

    #[test]
    fn test_self_vote_is_case_insensitive() {
        let config = FileSimulationConfig {
            self_vote: "Excluded".to_string(),
            ..Default::default()
        };
        assert_eq!(config.parse_self_vote(), (SelfVote::Excluded, vec![]));
    }
}
