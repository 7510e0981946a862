//! Majority rules for resolving report trees

use crate::core::order::Order;
use serde::{Deserialize, Serialize};

/// Whether a node's own report votes alongside its children's resolved values.
///
/// - `Counted`: the node's value is one vote next to one vote per child (default)
/// - `Excluded`: an interior node is decided by its children alone
///
/// A leaf keeps its own value under either rule.
///
/// # Example
///
/// ```
/// use byzgen_domain::SelfVote;
///
/// assert_eq!("excluded".parse::<SelfVote>().ok(), Some(SelfVote::Excluded));
/// assert_eq!(SelfVote::default(), SelfVote::Counted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelfVote {
    #[default]
    Counted,
    Excluded,
}

impl SelfVote {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelfVote::Counted => "counted",
            SelfVote::Excluded => "excluded",
        }
    }
}

impl std::fmt::Display for SelfVote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SelfVote {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "counted" => Ok(SelfVote::Counted),
            "excluded" => Ok(SelfVote::Excluded),
            _ => Err(format!(
                "Unknown self-vote rule: {}. Valid: counted, excluded",
                s
            )),
        }
    }
}

/// Vote counts for the two orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub attack: usize,
    pub retreat: usize,
}

impl VoteTally {
    pub fn add(&mut self, order: Order) {
        match order {
            Order::Attack => self.attack += 1,
            Order::Retreat => self.retreat += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.attack + self.retreat
    }

    /// Plurality winner. A tie resolves to RETREAT; no votes at all is `None`.
    pub fn winner(&self) -> Option<Order> {
        if self.total() == 0 {
            None
        } else if self.attack > self.retreat {
            Some(Order::Attack)
        } else {
            Some(Order::Retreat)
        }
    }
}

impl FromIterator<Order> for VoteTally {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        let mut tally = VoteTally::default();
        for order in iter {
            tally.add(order);
        }
        tally
    }
}
