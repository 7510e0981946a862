//! Results of a simulation run.
//!
//! - [`decision::Decision`]: the action one general took
//! - [`report::SimulationReport`]: every decision plus the run parameters

pub mod decision;
pub mod report;

pub use decision::Decision;
pub use report::SimulationReport;
