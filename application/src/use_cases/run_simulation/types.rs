//! Type definitions for the RunSimulation use case.

use crate::config::SimulationParams;
use byzgen_domain::{DomainError, GeneralId, Order, Roster};
use thiserror::Error;

/// Errors that can occur during a simulation
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("Channel to general {to} closed before delivery")]
    ChannelClosed { to: GeneralId },

    #[error("Inbox of general {general} closed after {received} of {expected} reports")]
    InboxClosed {
        general: GeneralId,
        received: u64,
        expected: u64,
    },

    #[error("General task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Input for the RunSimulation use case
#[derive(Debug, Clone)]
pub struct RunSimulationInput {
    /// Loyalty of every general; index 0 is the commander
    pub roster: Roster,
    /// Order handed to the commander
    pub order: Order,
    /// Relay rounds (m)
    pub rounds: usize,
    /// Parsing and resolution settings
    pub params: SimulationParams,
}

impl RunSimulationInput {
    pub fn new(roster: Roster, order: Order, rounds: usize) -> Self {
        Self {
            roster,
            order,
            rounds,
            params: SimulationParams::default(),
        }
    }

    /// Parse and validate the textual `<loyalty> <order> <m>` triple.
    pub fn parse(
        loyalty: &str,
        order: &str,
        rounds: usize,
        params: SimulationParams,
    ) -> Result<Self, DomainError> {
        let roster = Roster::parse_with_symbol(loyalty, params.loyal_symbol)?;
        let order = order.parse()?;
        Ok(Self {
            roster,
            order,
            rounds,
            params,
        })
    }

    pub fn generals(&self) -> usize {
        self.roster.len()
    }
}
