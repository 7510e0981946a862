//! Non-fatal validation of a roster against the number of relay rounds.
//!
//! OM(m) only guarantees agreement when `N >= 3m + 1` and at most `m`
//! generals are traitors. Runs outside that regime are still allowed (they
//! illustrate why the bound matters) but are flagged as warnings.
//!
//! # Examples
//!
//! ```
//! use byzgen_domain::{Roster, SimulationIssue};
//!
//! let roster = Roster::parse("LLTL").unwrap();
//! assert!(SimulationIssue::check(&roster, 1).is_empty());
//!
//! let small = Roster::parse("LTL").unwrap();
//! assert_eq!(SimulationIssue::check(&small, 1).len(), 1);
//! ```

use super::loyalty::Roster;
use serde::{Deserialize, Serialize};

/// Identifies a specific simulation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueCode {
    /// Fewer than `3m + 1` generals.
    BelowFaultThreshold { generals: usize, rounds: usize },
    /// More traitors than relay rounds can tolerate.
    TooManyTraitors { traitors: usize, rounds: usize },
}

/// A detected issue with a roster / rounds combination.
///
/// Issues never stop a run; fatal input problems are [`DomainError`](crate::DomainError)s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationIssue {
    pub code: IssueCode,
    pub message: String,
}

impl SimulationIssue {
    /// Check `roster` against OM(`rounds`), returning every issue found.
    pub fn check(roster: &Roster, rounds: usize) -> Vec<SimulationIssue> {
        let mut issues = Vec::new();
        let generals = roster.len();

        let required = rounds.saturating_mul(3).saturating_add(1);
        if generals < required {
            issues.push(SimulationIssue {
                code: IssueCode::BelowFaultThreshold { generals, rounds },
                message: format!(
                    "{} generals is below the 3m+1 = {} needed for OM({}); loyal generals may disagree",
                    generals, required, rounds
                ),
            });
        }

        let traitors = roster.traitor_count();
        if traitors > rounds {
            issues.push(SimulationIssue {
                code: IssueCode::TooManyTraitors { traitors, rounds },
                message: format!(
                    "{} traitors exceed the {} that OM({}) tolerates",
                    traitors, rounds, rounds
                ),
            });
        }

        issues
    }
}

impl std::fmt::Display for SimulationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
