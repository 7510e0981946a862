//! Progress notification port
//!
//! Defines the interface for reporting decisions as generals finish.

use byzgen_domain::{Decision, SimulationReport};

/// Callback for progress updates during a simulation
///
/// Implementations live in the presentation layer. `on_decision` fires in
/// completion order, which varies between runs.
pub trait DecisionNotifier: Send + Sync {
    /// Called once all generals are spawned, before the initial order is sent
    fn on_simulation_start(&self, _generals: usize, _expected_count: u64) {}

    /// Called when a general has decided
    fn on_decision(&self, decision: &Decision);

    /// Called after every general has decided
    fn on_simulation_complete(&self, _report: &SimulationReport) {}
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl DecisionNotifier for NoProgress {
    fn on_decision(&self, _decision: &Decision) {}
}
