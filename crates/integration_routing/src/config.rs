//! Routing client configuration

use serde::{Deserialize, Serialize};

/// Configuration shared by the routing clients
#[derive(Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// OpenRouteService API base URL
    #[serde(default = "default_openrouteservice_base_url")]
    pub openrouteservice_base_url: String,

    /// OpenRouteService API key (sent as the `Authorization` header when set)
    #[serde(skip_serializing)]
    pub openrouteservice_api_key: Option<String>,

    /// OpenRouteService routing profile
    #[serde(default = "default_openrouteservice_profile")]
    pub openrouteservice_profile: String,

    /// Search radius in meters for snapping points onto the road network
    #[serde(default = "default_snap_radius_meters")]
    pub snap_radius_meters: u32,

    /// OSRM API base URL
    #[serde(default = "default_osrm_base_url")]
    pub osrm_base_url: String,

    /// OSRM routing profile
    #[serde(default = "default_osrm_profile")]
    pub osrm_profile: String,

    /// Request timeout in seconds, applied per call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_openrouteservice_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

fn default_openrouteservice_profile() -> String {
    "driving-car".to_string()
}

const fn default_snap_radius_meters() -> u32 {
    1000
}

fn default_osrm_base_url() -> String {
    "https://router.project-osrm.org".to_string()
}

fn default_osrm_profile() -> String {
    "driving".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            openrouteservice_base_url: default_openrouteservice_base_url(),
            openrouteservice_api_key: None,
            openrouteservice_profile: default_openrouteservice_profile(),
            snap_radius_meters: default_snap_radius_meters(),
            osrm_base_url: default_osrm_base_url(),
            osrm_profile: default_osrm_profile(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for RoutingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingConfig")
            .field("openrouteservice_base_url", &self.openrouteservice_base_url)
            .field(
                "openrouteservice_api_key",
                &self.openrouteservice_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("openrouteservice_profile", &self.openrouteservice_profile)
            .field("snap_radius_meters", &self.snap_radius_meters)
            .field("osrm_base_url", &self.osrm_base_url)
            .field("osrm_profile", &self.osrm_profile)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl RoutingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.openrouteservice_base_url.is_empty() {
            return Err("openrouteservice_base_url must not be empty".to_string());
        }

        if self.osrm_base_url.is_empty() {
            return Err("osrm_base_url must not be empty".to_string());
        }

        if self.openrouteservice_profile.is_empty() || self.osrm_profile.is_empty() {
            return Err("routing profiles must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
