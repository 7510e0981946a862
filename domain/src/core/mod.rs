//! Core domain concepts shared across all subdomains.
//!
//! - [`order::Order`]: the binary command (ATTACK / RETREAT)
//! - [`GeneralId`]: participant identifier, `0` is the commander
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod order;

/// Participant identifier in `[0, N)`.
pub type GeneralId = usize;

/// The commander always carries identifier `0`.
pub const COMMANDER_ID: GeneralId = 0;
