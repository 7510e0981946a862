//! Application layer for byzgen
//!
//! This crate contains the General actors, the simulation use case and the
//! port definitions the outer layers implement.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SimulationParams;
pub use ports::{
    progress::{DecisionNotifier, NoProgress},
    relay_observer::{NoRelayObserver, RelayEvent, RelayObserver},
};
pub use use_cases::run_simulation::{RunSimulationInput, RunSimulationUseCase, SimulationError};
