//! Routing provider configurations: OpenRouteService and OSRM.

use integration_routing::RoutingConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::default_true;

/// Provider chain configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutingAppConfig {
    /// Primary provider
    #[serde(default)]
    pub openrouteservice: OpenRouteServiceAppConfig,

    /// Fallback provider
    #[serde(default)]
    pub osrm: OsrmAppConfig,
}

impl RoutingAppConfig {
    /// Check whether at least one provider is enabled
    #[must_use]
    pub const fn any_enabled(&self) -> bool {
        self.openrouteservice.enabled || self.osrm.enabled
    }
}

// ==============================
// OpenRouteService Configuration
// ==============================

/// OpenRouteService configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouteServiceAppConfig {
    /// Whether the provider takes part in the chain
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// API base URL
    #[serde(default = "default_ors_base_url")]
    pub base_url: String,

    /// Routing profile
    #[serde(default = "default_ors_profile")]
    pub profile: String,

    /// API key (sensitive - uses `SecretString`)
    ///
    /// Obtain from <https://openrouteservice.org/dev/#/signup>
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Radius in meters for snapping points onto the road network
    #[serde(default = "default_snap_radius")]
    pub snap_radius_meters: u32,
}

fn default_ors_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

fn default_ors_profile() -> String {
    "driving-car".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_snap_radius() -> u32 {
    1000
}

impl Default for OpenRouteServiceAppConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_ors_base_url(),
            profile: default_ors_profile(),
            api_key: None,
            timeout_secs: default_timeout(),
            snap_radius_meters: default_snap_radius(),
        }
    }
}

impl OpenRouteServiceAppConfig {
    /// Convert to `integration_routing` config
    #[must_use]
    pub fn to_routing_config(&self) -> RoutingConfig {
        RoutingConfig {
            openrouteservice_base_url: self.base_url.clone(),
            openrouteservice_api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string()),
            openrouteservice_profile: self.profile.clone(),
            snap_radius_meters: self.snap_radius_meters,
            timeout_secs: self.timeout_secs,
            ..RoutingConfig::default()
        }
    }
}

// ==============================
// OSRM Configuration
// ==============================

/// OSRM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmAppConfig {
    /// Whether the provider takes part in the chain
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// API base URL
    #[serde(default = "default_osrm_base_url")]
    pub base_url: String,

    /// Routing profile
    #[serde(default = "default_osrm_profile")]
    pub profile: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_osrm_base_url() -> String {
    "https://router.project-osrm.org".to_string()
}

fn default_osrm_profile() -> String {
    "driving".to_string()
}

impl Default for OsrmAppConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_osrm_base_url(),
            profile: default_osrm_profile(),
            timeout_secs: default_timeout(),
        }
    }
}

impl OsrmAppConfig {
    /// Convert to `integration_routing` config
    #[must_use]
    pub fn to_routing_config(&self) -> RoutingConfig {
        RoutingConfig {
            osrm_base_url: self.base_url.clone(),
            osrm_profile: self.profile.clone(),
            timeout_secs: self.timeout_secs,
            ..RoutingConfig::default()
        }
    }
}
