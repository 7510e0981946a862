//! CLI entrypoint for byzgen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use byzgen_application::{RunSimulationInput, RunSimulationUseCase};
use byzgen_domain::OutputFormat;
use byzgen_infrastructure::{ConfigLoader, JsonlRelayLogger};
use byzgen_presentation::{Cli, ConsoleFormatter, DecisionPrinter, OutputConfig, RunSettings};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout carries decision lines only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in file_config.validate() {
        warn!("{}", issue.message);
    }

    // CLI flags take precedence over file values
    let settings = RunSettings {
        params: file_config.simulation.to_params(),
        output: OutputConfig {
            format: file_config.output.format.unwrap_or_default(),
            color: file_config.output.color,
            summary: file_config.output.summary,
        },
        trace: file_config.trace.path,
    }
    .with_cli_overrides(&cli);
    let output = settings.output;
    let color = output.color && std::io::stdout().is_terminal();

    let Some((loyalty, order, rounds)) = cli.positionals() else {
        bail!("Expected <LOYALTY> <ORDER> <M>");
    };
    let input = RunSimulationInput::parse(loyalty, order, rounds, settings.params)?;

    // === Dependency Injection ===
    let mut use_case = RunSimulationUseCase::new();

    if let Some(path) = &settings.trace {
        match JsonlRelayLogger::new(path) {
            Some(logger) => {
                info!("Writing relay transcript to {}", logger.path().display());
                use_case = use_case.with_observer(Arc::new(logger));
            }
            None => warn!("Relay transcript disabled"),
        }
    }

    info!("Starting byzgen");

    match output.format {
        OutputFormat::Text => {
            let printer = DecisionPrinter::stdout(color);
            let report = use_case.execute_with_progress(input, &printer).await?;
            if output.summary {
                print!("{}", ConsoleFormatter::format_summary(&report, color));
            }
        }
        OutputFormat::Json => {
            let report = use_case.execute(input).await?;
            println!("{}", ConsoleFormatter::format_json(&report));
        }
    }

    Ok(())
}
