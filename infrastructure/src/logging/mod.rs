//! Logging infrastructure: structured relay transcripts.
//!
//! Provides [`JsonlRelayLogger`], a JSONL file writer that implements
//! the [`RelayObserver`](byzgen_application::RelayObserver) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlRelayLogger;
