//! Loyalty classification and roster parsing

use crate::core::error::DomainError;
use crate::core::{COMMANDER_ID, GeneralId};
use serde::{Deserialize, Serialize};

/// Symbol marking a loyal general in a loyalty string.
pub const DEFAULT_LOYAL_SYMBOL: char = 'L';

/// Fixed behavior of one general, assigned at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loyalty {
    Loyal,
    Traitor,
}

impl Loyalty {
    pub fn is_loyal(self) -> bool {
        matches!(self, Loyalty::Loyal)
    }

    pub fn is_traitor(self) -> bool {
        matches!(self, Loyalty::Traitor)
    }
}

impl std::fmt::Display for Loyalty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Loyalty::Loyal => write!(f, "Loyal"),
            Loyalty::Traitor => write!(f, "Traitor"),
        }
    }
}

/// The generals taking part in one run (Value Object)
///
/// Index `i` holds the loyalty of general `i`; index `0` is the commander.
///
/// # Example
///
/// ```
/// use byzgen_domain::{Loyalty, Roster};
///
/// let roster = Roster::parse("LLTL").unwrap();
/// assert_eq!(roster.len(), 4);
/// assert_eq!(roster.loyalty(2), Some(Loyalty::Traitor));
/// assert_eq!(roster.traitor_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Loyalty>", into = "Vec<Loyalty>")]
pub struct Roster {
    generals: Vec<Loyalty>,
}

impl Roster {
    /// Build a roster directly from loyalties.
    pub fn new(generals: Vec<Loyalty>) -> Result<Self, DomainError> {
        if generals.is_empty() {
            return Err(DomainError::EmptyRoster);
        }
        Ok(Self { generals })
    }

    /// Parse a loyalty string using [`DEFAULT_LOYAL_SYMBOL`].
    pub fn parse(loyalty: &str) -> Result<Self, DomainError> {
        Self::parse_with_symbol(loyalty, DEFAULT_LOYAL_SYMBOL)
    }

    /// Parse a loyalty string: `loyal_symbol` marks loyal, any other character a traitor.
    pub fn parse_with_symbol(loyalty: &str, loyal_symbol: char) -> Result<Self, DomainError> {
        let generals = loyalty
            .chars()
            .map(|c| {
                if c == loyal_symbol {
                    Loyalty::Loyal
                } else {
                    Loyalty::Traitor
                }
            })
            .collect();
        Self::new(generals)
    }

    pub fn len(&self) -> usize {
        self.generals.len()
    }

    /// Always false for a constructed roster; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.generals.is_empty()
    }

    pub fn loyalty(&self, id: GeneralId) -> Option<Loyalty> {
        self.generals.get(id).copied()
    }

    pub fn commander(&self) -> Loyalty {
        self.generals[COMMANDER_ID]
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeneralId, Loyalty)> + '_ {
        self.generals.iter().copied().enumerate()
    }

    pub fn traitor_count(&self) -> usize {
        self.generals.iter().filter(|l| l.is_traitor()).count()
    }
}

impl TryFrom<Vec<Loyalty>> for Roster {
    type Error = DomainError;

    fn try_from(generals: Vec<Loyalty>) -> Result<Self, Self::Error> {
        Self::new(generals)
    }
}

impl From<Roster> for Vec<Loyalty> {
    fn from(roster: Roster) -> Self {
        roster.generals
    }
}
