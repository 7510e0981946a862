//! Application-level configuration.
//!
//! - [`SimulationParams`]: knobs that shape how a run is parsed and resolved

pub mod simulation_params;

pub use simulation_params::SimulationParams;
