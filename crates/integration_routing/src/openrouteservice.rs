//! OpenRouteService directions client
//!
//! Client for the OpenRouteService v2 directions API
//! (<https://openrouteservice.org/dev/#/api-docs/v2/directions>), requesting
//! GeoJSON output via the GET endpoint.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use domain::GeoPoint;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::RoutingConfig,
    error::RoutingError,
    models::{RouteResponse, checked_measure, decode_positions},
    provider::RoutingClient,
    transport::fetch_body,
};

const PROVIDER_NAME: &str = "openrouteservice";

/// Route could not be found between the points
const ROUTE_NOT_FOUND: u32 = 2009;
/// No routable point within the snap radius
const POINT_NOT_FOUND: u32 = 2010;

/// OpenRouteService API response structures
mod api {
    use serde::Deserialize;

    use crate::models::LineStringGeometry;

    #[derive(Debug, Deserialize)]
    pub struct ErrorResponse {
        pub error: ErrorDetail,
    }

    #[derive(Debug, Deserialize)]
    pub struct ErrorDetail {
        pub code: Option<u32>,
        pub message: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct FeatureCollection {
        #[serde(default)]
        pub features: Vec<Feature>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Feature {
        pub geometry: LineStringGeometry,
        pub properties: Properties,
    }

    #[derive(Debug, Deserialize)]
    pub struct Properties {
        pub summary: Option<Summary>,
        #[serde(default)]
        pub segments: Vec<Segment>,
    }

    /// ORS omits zero-valued members from the summary
    #[derive(Debug, Deserialize)]
    pub struct Summary {
        #[serde(default)]
        pub distance: f64,
        #[serde(default)]
        pub duration: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Segment {
        #[serde(default)]
        pub distance: f64,
        #[serde(default)]
        pub duration: f64,
        #[serde(default)]
        pub steps: Vec<serde_json::Value>,
    }
}

/// OpenRouteService directions client
pub struct OpenRouteServiceClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    profile: String,
    snap_radius_meters: u32,
    timeout_secs: u64,
}

impl std::fmt::Debug for OpenRouteServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouteServiceClient")
            .field("base_url", &self.base_url)
            .field("profile", &self.profile)
            .field("has_api_key", &self.api_key.is_some())
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl OpenRouteServiceClient {
    /// Create a new OpenRouteService client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("RouteLink/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RoutingError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.openrouteservice_api_key.clone(),
            base_url: config.openrouteservice_base_url.trim_end_matches('/').to_string(),
            profile: config.openrouteservice_profile.clone(),
            snap_radius_meters: config.snap_radius_meters,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Check if an API key is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Directions endpoint for the configured profile
    fn directions_url(&self) -> String {
        format!("{}/v2/directions/{}", self.base_url, self.profile)
    }

    /// Build the query parameters; ORS expects `lng,lat` ordering
    fn query_params(&self, start: GeoPoint, end: GeoPoint) -> Vec<(&'static str, String)> {
        vec![
            ("start", start.to_lng_lat_string()),
            ("end", end.to_lng_lat_string()),
            ("format", "geojson".to_string()),
            ("geometry_format", "geojson".to_string()),
            ("instructions", "true".to_string()),
            ("elevation", "false".to_string()),
            (
                "extra_info",
                "waytype|surface|steepness|tollways".to_string(),
            ),
            ("radiuses", self.snap_radius_meters.to_string()),
            ("continue_straight", "false".to_string()),
        ]
    }

    /// Recognize an error reply that means the points cannot be connected
    ///
    /// ORS sends routing failures as `{"error": {"code": ..., "message": ...}}`
    /// with a 404 status.
    fn classify_error(body: &str, start: GeoPoint, end: GeoPoint) -> Option<RoutingError> {
        let raw: api::ErrorResponse = serde_json::from_str(body).ok()?;
        let code = raw.error.code?;
        matches!(code, ROUTE_NOT_FOUND | POINT_NOT_FOUND).then(|| {
            debug!(
                code,
                message = raw.error.message.as_deref().unwrap_or("-"),
                "OpenRouteService found no route"
            );
            RoutingError::NoRouteFound {
                from: start.to_string(),
                to: end.to_string(),
            }
        })
    }

    /// Decode a GeoJSON directions body, keeping only the first feature
    fn parse_response(
        body: &str,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<RouteResponse, RoutingError> {
        let collection: api::FeatureCollection =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let Some(feature) = collection.features.into_iter().next() else {
            return Err(RoutingError::NoRouteFound {
                from: start.to_string(),
                to: end.to_string(),
            });
        };

        let coordinates = decode_positions(&feature.geometry.coordinates)?;

        let properties = feature.properties;
        let (distance, duration) = match (&properties.summary, properties.segments.first()) {
            (Some(summary), _) => (summary.distance, summary.duration),
            (None, Some(segment)) => (segment.distance, segment.duration),
            (None, None) => {
                return Err(RoutingError::ParseError(
                    "route has neither summary nor segments".to_string(),
                ));
            },
        };

        let steps = properties
            .segments
            .into_iter()
            .flat_map(|segment| segment.steps)
            .collect();

        let mut response = RouteResponse::new(
            PROVIDER_NAME,
            coordinates,
            checked_measure(distance, "distance")?,
            checked_measure(duration, "duration")?,
        );
        response.steps = steps;
        Ok(response)
    }
}

#[async_trait]
impl RoutingClient for OpenRouteServiceClient {
    #[instrument(skip(self), fields(provider = PROVIDER_NAME))]
    async fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<RouteResponse, RoutingError> {
        let url = self.directions_url();
        let started = Instant::now();

        debug!(url = %url, "Sending OpenRouteService request");

        let mut request = self
            .client
            .get(&url)
            .query(&self.query_params(start, end))
            .header("Accept", "application/geo+json, application/json");
        if let Some(ref key) = self.api_key {
            request = request.header("Authorization", key);
        }

        let body = fetch_body(request, self.timeout_secs, |_, body| {
            Self::classify_error(body, start, end)
        })
        .await?;
        let mut response = Self::parse_response(&body, start, end)?;

        let elapsed = started.elapsed();
        #[allow(clippy::cast_possible_truncation)]
        {
            response.response_time_ms = Some(elapsed.as_millis() as u64);
        }

        debug!(
            points = response.coordinates.len(),
            distance_m = response.distance_meters,
            duration_s = response.duration_seconds,
            time_ms = elapsed.as_millis(),
            "OpenRouteService route decoded"
        );

        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
