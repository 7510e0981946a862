//! Ports (interfaces) for the outer layers
//!
//! - [`progress::DecisionNotifier`]: live decision callbacks (console output)
//! - [`relay_observer::RelayObserver`]: structured relay transcript (JSONL)

pub mod progress;
pub mod relay_observer;
