//! Participants of a simulation and their fixed classification.
//!
//! - [`loyalty::Roster`]: parsed loyalty string, one [`loyalty::Loyalty`] per general
//! - [`validation::SimulationIssue`]: non-fatal problems with a roster / `m` combination

pub mod loyalty;
pub mod validation;

pub use loyalty::{DEFAULT_LOYAL_SYMBOL, Loyalty, Roster};
pub use validation::{IssueCode, SimulationIssue};
