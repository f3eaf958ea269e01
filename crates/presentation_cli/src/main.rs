//! RouteLink CLI
//!
//! Resolves driving routes from the command line.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::Context;
use application::{ResolutionOutcome, RouteResolver};
use clap::Parser;
use domain::RouteQuery;
use infrastructure::{AppConfig, LoggingConfig, build_route_resolver, init_tracing};
use presentation_cli::{Cli, Commands, CoordinateArg, log_filter_from_verbosity, output};
use tracing::debug;

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => AppConfig::load().context("failed to load configuration"),
    }
}

/// Configured logging, with `-v` flags taking precedence over the file
fn logging_config(config: &AppConfig, verbose: u8) -> LoggingConfig {
    if verbose == 0 {
        return config.logging.clone();
    }
    LoggingConfig {
        filter: log_filter_from_verbosity(verbose).to_string(),
        ..config.logging.clone()
    }
}

async fn run_route(
    resolver: &RouteResolver,
    from: CoordinateArg,
    to: CoordinateArg,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let (outcome, warnings) =
        match RouteQuery::from_coordinates(from.lat, from.lng, to.lat, to.lng) {
            Ok(query) => {
                let warnings = resolver.service_area_warnings(&query);
                (resolver.resolve_query(&query).await, warnings)
            },
            Err(e) => (ResolutionOutcome::Failure(e.into()), Vec::new()),
        };

    if json {
        println!("{}", output::render_json(&outcome, &warnings)?);
    } else {
        eprint!("{}", output::render_warnings(&warnings));
        match &outcome {
            ResolutionOutcome::Success(route) => print!("{}", output::render_route(route)),
            ResolutionOutcome::Failure(err) => eprint!("{}", output::render_failure(err)),
        }
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_tracing(&logging_config(&config, cli.verbose))?;
    debug!(command = ?cli.command, "Starting");

    match cli.command {
        Commands::Route { from, to, json } => {
            let resolver = build_route_resolver(&config)?;
            run_route(&resolver, from, to, json).await
        },
        Commands::Providers => {
            let resolver = build_route_resolver(&config)?;
            print!("{}", output::render_providers(&resolver.provider_names()));
            Ok(ExitCode::SUCCESS)
        },
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        },
    }
}
