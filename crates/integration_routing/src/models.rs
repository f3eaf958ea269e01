//! Routing data models
//!
//! Provider-independent representation of a decoded route, plus helpers
//! shared by the provider clients for decoding GeoJSON geometry.

use domain::GeoPoint;
use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// The first route returned by a provider, decoded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteResponse {
    /// Route polyline in `(lat, lng)` order, start to end
    pub coordinates: Vec<GeoPoint>,

    /// Total distance in meters
    pub distance_meters: f64,

    /// Total duration in seconds
    pub duration_seconds: f64,

    /// Turn-by-turn steps as returned by the provider
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<serde_json::Value>,

    /// Provider that produced the route (e.g., "openrouteservice", "osrm")
    pub provider: String,

    /// Time taken for the request in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
}

impl RouteResponse {
    /// Create a new route response without steps
    #[must_use]
    pub fn new(
        provider: &str,
        coordinates: Vec<GeoPoint>,
        distance_meters: f64,
        duration_seconds: f64,
    ) -> Self {
        Self {
            coordinates,
            distance_meters,
            duration_seconds,
            steps: Vec::new(),
            provider: provider.to_string(),
            response_time_ms: None,
        }
    }
}

/// GeoJSON `LineString` geometry as both providers return it
#[derive(Debug, Deserialize)]
pub(crate) struct LineStringGeometry {
    pub coordinates: Vec<Vec<f64>>,
}

/// Convert provider-native `[lng, lat, ...]` positions into `(lat, lng)` points
///
/// Extra position members (elevation) are ignored.
pub(crate) fn decode_positions(positions: &[Vec<f64>]) -> Result<Vec<GeoPoint>, RoutingError> {
    positions
        .iter()
        .enumerate()
        .map(|(i, position)| match position.as_slice() {
            [lng, lat, ..] => GeoPoint::from_lng_lat(*lng, *lat)
                .map_err(|e| RoutingError::ParseError(format!("position {i}: {e}"))),
            _ => Err(RoutingError::ParseError(format!(
                "position {i} has {} members, expected at least 2",
                position.len()
            ))),
        })
        .collect()
}

/// Check a distance or duration read from a provider summary
pub(crate) fn checked_measure(value: f64, name: &str) -> Result<f64, RoutingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RoutingError::ParseError(format!(
            "route {name} must be a non-negative number, got {value}"
        )))
    }
}
