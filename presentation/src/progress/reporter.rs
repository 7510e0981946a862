//! Progress reporting for simulation runs

use crate::output::console::ConsoleFormatter;
use byzgen_application::DecisionNotifier;
use byzgen_domain::Decision;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

/// Streams one decision line per general as soon as it decides.
///
/// Lines appear in completion order, which differs between runs.
pub struct DecisionPrinter<W: Write + Send = Stdout> {
    out: Mutex<W>,
    color: bool,
}

impl DecisionPrinter<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write + Send> DecisionPrinter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    /// Recover the writer, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> DecisionNotifier for DecisionPrinter<W> {
    fn on_decision(&self, decision: &Decision) {
        let line = ConsoleFormatter::decision_line(decision, self.color);
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }
}
