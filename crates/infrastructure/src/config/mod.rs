//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `routing`: OpenRouteService and OSRM provider settings
//!
//! Values come from an optional `config.toml` overlaid by environment
//! variables prefixed with `ROUTELINK` and nested with `__`
//! (e.g. `ROUTELINK__ROUTING__OSRM__TIMEOUT_SECS=5`).

mod routing;

use std::path::Path;

use domain::BoundingBox;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use routing::{OpenRouteServiceAppConfig, OsrmAppConfig, RoutingAppConfig};

/// Conventional variable holding the OpenRouteService key
pub const OPENROUTESERVICE_API_KEY_VAR: &str = "OPENROUTESERVICE_API_KEY";

const ENV_PREFIX: &str = "ROUTELINK";
const ENV_SEPARATOR: &str = "__";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives (e.g., "info", "warn,integration_routing=debug")
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Routing provider chain
    #[serde(default)]
    pub routing: RoutingAppConfig,

    /// Nominal service area; points outside it only produce warnings
    #[serde(default)]
    pub service_area: BoundingBox,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result is invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file plus environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unparsable, or the result
    /// is invalid.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., ROUTELINK__LOGGING__JSON=true)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        let loaded = loaded.with_api_key_fallback(std::env::var(OPENROUTESERVICE_API_KEY_VAR).ok());
        loaded.validate()?;

        debug!(
            openrouteservice = loaded.routing.openrouteservice.enabled,
            osrm = loaded.routing.osrm.enabled,
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Use `key` as the OpenRouteService key unless one is already configured
    #[must_use]
    pub fn with_api_key_fallback(mut self, key: Option<String>) -> Self {
        if self.routing.openrouteservice.api_key.is_none() {
            self.routing.openrouteservice.api_key = key
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from);
        }
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` describing the first problem found.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let ors = &self.routing.openrouteservice;
        let osrm = &self.routing.osrm;

        if !self.routing.any_enabled() {
            return Err(invalid("at least one routing provider must be enabled"));
        }
        if ors.base_url.trim().is_empty() {
            return Err(invalid("routing.openrouteservice.base_url must not be empty"));
        }
        if osrm.base_url.trim().is_empty() {
            return Err(invalid("routing.osrm.base_url must not be empty"));
        }
        if ors.timeout_secs == 0 || osrm.timeout_secs == 0 {
            return Err(invalid("routing timeouts must be greater than 0"));
        }
        self.service_area
            .validate()
            .map_err(|e| invalid(&format!("service_area: {e}")))?;

        Ok(())
    }

    /// Render the effective configuration as TOML (secrets omitted)
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn invalid(message: &str) -> config::ConfigError {
    config::ConfigError::Message(message.to_string())
}
