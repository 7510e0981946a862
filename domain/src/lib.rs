//! Domain layer for byzgen
//!
//! This crate contains the OM(m) rules as plain data and pure functions.
//! It has no dependencies on channels, tasks, configuration files or output.
//!
//! # Core Concepts
//!
//! ## Oral messages
//!
//! The commander (general `0`) sends an [`Order`] to every lieutenant. Each
//! lieutenant relays what it heard to every general not yet on the
//! [`Message`] path, for `m` rounds. Traitors relay inconsistently
//! ([`RelayPlan`]).
//!
//! ## Report trees
//!
//! Every general files each report under its relay path in an [`OrderTree`]
//! and, once it holds [`ExpectedCount`] reports, decides by bottom-up
//! majority. Ties retreat.

pub mod config;
pub mod core;
pub mod outcome;
pub mod relay;
pub mod roster;
pub mod tree;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{COMMANDER_ID, GeneralId, error::DomainError, order::Order};
pub use outcome::{Decision, SimulationReport};
pub use relay::{Delivery, ExpectedCount, Message, RelayPlan, expected_count, falling_factorial};
pub use roster::{
    DEFAULT_LOYAL_SYMBOL, IssueCode, Loyalty, Roster, SimulationIssue,
};
pub use tree::{OrderNode, OrderTree, SelfVote, VoteTally};
