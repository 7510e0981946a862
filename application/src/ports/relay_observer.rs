//! Port for structured relay transcripts.
//!
//! Defines the [`RelayObserver`] trait for recording every message a general
//! sends, every report it files and every decision it takes.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the full transcript
//! in a machine-readable form (e.g. JSONL).

use byzgen_domain::{GeneralId, Loyalty, Order};
use serde::Serialize;

/// A structured relay event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayEvent {
    SimulationStarted {
        generals: usize,
        rounds: usize,
        order: Order,
        expected_count: u64,
    },
    MessageSent {
        from: GeneralId,
        to: GeneralId,
        order: Order,
        path: Vec<GeneralId>,
        recursion_level: usize,
    },
    ReportFiled {
        general: GeneralId,
        order: Order,
        path: Vec<GeneralId>,
        report_count: u64,
    },
    GeneralDecided {
        general: GeneralId,
        loyalty: Loyalty,
        action: Order,
    },
    SimulationFinished {
        agreement: Option<Order>,
        valid: bool,
    },
}

impl RelayEvent {
    /// Event type identifier as written to transcripts.
    pub fn event_type(&self) -> &'static str {
        match self {
            RelayEvent::SimulationStarted { .. } => "simulation_started",
            RelayEvent::MessageSent { .. } => "message_sent",
            RelayEvent::ReportFiled { .. } => "report_filed",
            RelayEvent::GeneralDecided { .. } => "general_decided",
            RelayEvent::SimulationFinished { .. } => "simulation_finished",
        }
    }
}

/// Port for recording relay events.
///
/// Called concurrently from every general's task. The `record` method is
/// synchronous and non-fallible so a failing sink never stalls a general.
pub trait RelayObserver: Send + Sync {
    fn record(&self, event: RelayEvent);
}

/// No-op implementation for when no transcript is wanted.
pub struct NoRelayObserver;

impl RelayObserver for NoRelayObserver {
    fn record(&self, _event: RelayEvent) {}
}
