//! Simulation report

use super::decision::Decision;
use crate::core::GeneralId;
use crate::core::order::Order;
use crate::roster::{Loyalty, SimulationIssue};
use crate::tree::SelfVote;
use serde::{Deserialize, Serialize};

/// Complete result of one OM(m) run
///
/// Decisions are kept sorted by general id regardless of the order in which
/// the generals finished.
///
/// # Example
///
/// ```
/// use byzgen_domain::{Decision, Loyalty, Order, SimulationReport};
///
/// let report = SimulationReport::new(3, 1, Order::Attack, 2, vec![
///     Decision::new(2, Loyalty::Loyal, Order::Attack),
///     Decision::new(0, Loyalty::Loyal, Order::Attack),
///     Decision::new(1, Loyalty::Traitor, Order::Retreat),
/// ]);
///
/// assert_eq!(report.decisions[0].general, 0);
/// assert_eq!(report.loyal_agreement(), Some(Order::Attack));
/// assert!(report.is_valid());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Number of generals (N)
    pub generals: usize,
    /// Relay rounds (m)
    pub rounds: usize,
    /// The order handed to the commander
    pub order: Order,
    /// Self-vote rule used to resolve trees
    pub self_vote: SelfVote,
    /// Reports each lieutenant collected before deciding
    pub expected_count: u64,
    /// One decision per general, sorted by id
    pub decisions: Vec<Decision>,
    /// Warnings detected before the run
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub issues: Vec<SimulationIssue>,
}

impl SimulationReport {
    pub fn new(
        generals: usize,
        rounds: usize,
        order: Order,
        expected_count: u64,
        mut decisions: Vec<Decision>,
    ) -> Self {
        decisions.sort_by_key(|d| d.general);
        Self {
            generals,
            rounds,
            order,
            self_vote: SelfVote::default(),
            expected_count,
            decisions,
            issues: Vec::new(),
        }
    }

    pub fn with_self_vote(mut self, self_vote: SelfVote) -> Self {
        self.self_vote = self_vote;
        self
    }

    pub fn with_issues(mut self, issues: Vec<SimulationIssue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn decision(&self, general: GeneralId) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.general == general)
    }

    /// Whether every general reported exactly one decision.
    pub fn is_complete(&self) -> bool {
        self.decisions.len() == self.generals
            && self
                .decisions
                .iter()
                .enumerate()
                .all(|(i, d)| d.general == i)
    }

    pub fn commander(&self) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.is_commander())
    }

    pub fn loyal_lieutenants(&self) -> impl Iterator<Item = &Decision> {
        self.decisions
            .iter()
            .filter(|d| !d.is_commander() && d.is_loyal())
    }

    pub fn traitor_count(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| d.loyalty == Loyalty::Traitor)
            .count()
    }

    /// The shared action of all loyal lieutenants, or `None` if they disagree
    /// or there are none.
    pub fn loyal_agreement(&self) -> Option<Order> {
        let mut actions = self.loyal_lieutenants().map(|d| d.action);
        let first = actions.next()?;
        actions.all(|a| a == first).then_some(first)
    }

    /// Interactive consistency condition 2: with a loyal commander, every loyal
    /// lieutenant obeys the commander's order. Trivially true otherwise.
    pub fn is_valid(&self) -> bool {
        match self.commander() {
            Some(c) if c.is_loyal() => self.loyal_lieutenants().all(|d| d.action == self.order),
            _ => true,
        }
    }
}
