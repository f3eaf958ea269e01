//! Tracing subscriber initialization
//!
//! Installs a console subscriber driven by [`LoggingConfig`]. `RUST_LOG`
//! overrides the configured filter when present.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter directives could not be parsed
    #[error("Invalid log filter '{filter}': {message}")]
    Filter {
        /// Offending directives
        filter: String,
        /// Parser message
        message: String,
    },

    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Build the filter from `RUST_LOG`, falling back to the configured directives
fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.filter).map_err(|e| TelemetryError::Filter {
        filter: config.filter.clone(),
        message: e.to_string(),
    })
}

/// Initialize the global tracing subscriber
///
/// # Example
///
/// ```ignore
/// use infrastructure::{AppConfig, init_tracing};
///
/// let config = AppConfig::load()?;
/// init_tracing(&config.logging)?;
/// ```
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber has
/// already been installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(json = config.json, "Tracing initialized");
    Ok(())
}
