//! Command-line arguments

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

/// RouteLink CLI
#[derive(Debug, Parser)]
#[command(name = "routelink-cli")]
#[command(author, version, about = "Driving routes with provider fallback", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "ROUTELINK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate a driving route between two points
    ///
    /// Example: routelink-cli route --from 48.853,2.3499 --to 45.7578,4.832
    Route {
        /// Start point as LAT,LNG
        #[arg(long, allow_hyphen_values = true)]
        from: CoordinateArg,

        /// End point as LAT,LNG
        #[arg(long, allow_hyphen_values = true)]
        to: CoordinateArg,

        /// Print the normalized route as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the routing providers in fallback order
    Providers,

    /// Print the effective configuration (secrets omitted)
    Config,
}

/// A `LAT,LNG` pair as typed by the user
///
/// Only the syntax is checked here; range validation is left to the
/// resolver so that it reports invalid input like any other caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateArg {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl FromStr for CoordinateArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected LAT,LNG but got '{s}'"))?;

        let parse = |value: &str, name: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid {name} '{}': {e}", value.trim()))
        };

        Ok(Self {
            lat: parse(lat, "latitude")?,
            lng: parse(lng, "longitude")?,
        })
    }
}

impl fmt::Display for CoordinateArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Determine log filter level from verbosity count
#[must_use]
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
