//! Console output formatter for simulation results

use byzgen_domain::{Decision, Loyalty, SimulationReport};
use colored::Colorize;

/// Formats decisions and reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One decision line, e.g. `Loyal General   2 took action ATTACK`.
    ///
    /// The label is padded to the width of `Traitor General` so ids line up.
    pub fn decision_line(decision: &Decision, color: bool) -> String {
        let (label, pad) = match decision.loyalty {
            Loyalty::Loyal => ("Loyal General", "   "),
            Loyalty::Traitor => ("Traitor General", " "),
        };
        let label = match (color, decision.loyalty) {
            (false, _) => label.to_string(),
            (true, Loyalty::Loyal) => label.green().to_string(),
            (true, Loyalty::Traitor) => label.red().to_string(),
        };
        format!(
            "{}{}{} took action {}",
            label, pad, decision.general, decision.action
        )
    }

    /// Format as JSON
    pub fn format_json(report: &SimulationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Agreement summary printed after the decision lines
    pub fn format_summary(report: &SimulationReport, color: bool) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Summary", color));
        output.push_str(&format!(
            "Generals: {}  Traitors: {}  Rounds: {}  Reports per lieutenant: {}\n",
            report.generals,
            report.traitor_count(),
            report.rounds,
            report.expected_count
        ));
        output.push_str(&format!("Self-vote rule: {}\n", report.self_vote));

        let agreement = match report.loyal_agreement() {
            Some(order) => Self::status(&format!("loyal lieutenants agree on {}", order), true, color),
            None if report.loyal_lieutenants().next().is_none() => {
                "no loyal lieutenants".to_string()
            }
            None => Self::status("loyal lieutenants disagree", false, color),
        };
        output.push_str(&format!("Agreement: {}\n", agreement));

        let validity = if report.is_valid() {
            Self::status("holds", true, color)
        } else {
            Self::status("violated", false, color)
        };
        output.push_str(&format!("Validity:  {}\n", validity));

        for issue in &report.issues {
            let line = format!("warning: {}", issue);
            if color {
                output.push_str(&format!("{}\n", line.yellow()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }

        output
    }

    fn status(text: &str, ok: bool, color: bool) -> String {
        match (color, ok) {
            (false, _) => text.to_string(),
            (true, true) => text.green().to_string(),
            (true, false) => text.red().bold().to_string(),
        }
    }

    fn section_header(title: &str, color: bool) -> String {
        let title = if color {
            title.cyan().bold().to_string()
        } else {
            title.to_string()
        };
        format!("\n{}\n{}\n", title, "-".repeat(40))
    }
}
