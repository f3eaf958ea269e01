//! OSRM route client
//!
//! Client for the OSRM HTTP route service
//! (<https://project-osrm.org/docs/v5.24.0/api/#route-service>). No
//! authentication is required by the public demo server.

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

const PROVIDER_NAME: &str = "osrm";

/// No path connects the snapped points
const NO_ROUTE_CODE: &str = "NoRoute";
/// A point could not be snapped to the road network
const NO_SEGMENT_CODE: &str = "NoSegment";

/// OSRM API response structures
mod api {
    use serde::Deserialize;

    use crate::models::LineStringGeometry;

    #[derive(Debug, Deserialize)]
    pub struct RouteServiceResponse {
        pub code: Option<String>,
        pub message: Option<String>,
        #[serde(default)]
        pub routes: Vec<Route>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ErrorResponse {
        pub code: String,
        pub message: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Route {
        pub geometry: LineStringGeometry,
        pub distance: f64,
        pub duration: f64,
        #[serde(default)]
        pub legs: Vec<Leg>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Leg {
        #[serde(default)]
        pub steps: Vec<serde_json::Value>,
    }
}

/// OSRM route service client
#[derive(Debug)]
pub struct OsrmClient {
    client: Client,
    base_url: String,
    profile: String,
    timeout_secs: u64,
}

impl OsrmClient {
    /// Create a new OSRM client
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
            base_url: config.osrm_base_url.trim_end_matches('/').to_string(),
            profile: config.osrm_profile.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Build the route URL; coordinates go in the path as `lng,lat;lng,lat`
    fn route_url(&self, start: GeoPoint, end: GeoPoint) -> String {
        format!(
            "{}/route/v1/{}/{};{}",
            self.base_url,
            self.profile,
            start.to_lng_lat_string(),
            end.to_lng_lat_string()
        )
    }

    /// Query flags requesting full GeoJSON geometry and step detail
    const fn query_params() -> [(&'static str, &'static str); 3] {
        [
            ("overview", "full"),
            ("geometries", "geojson"),
            ("steps", "true"),
        ]
    }

    /// Recognize an error reply that means the points cannot be connected
    ///
    /// OSRM answers `NoRoute` and `NoSegment` with HTTP 400.
    fn classify_error(body: &str, start: GeoPoint, end: GeoPoint) -> Option<RoutingError> {
        let raw: api::ErrorResponse = serde_json::from_str(body).ok()?;
        matches!(raw.code.as_str(), NO_ROUTE_CODE | NO_SEGMENT_CODE).then(|| {
            debug!(
                code = %raw.code,
                message = raw.message.as_deref().unwrap_or("-"),
                "OSRM found no route"
            );
            RoutingError::NoRouteFound {
                from: start.to_string(),
                to: end.to_string(),
            }
        })
    }

    /// Decode a route service body, keeping only the first route
    fn parse_response(
        body: &str,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<RouteResponse, RoutingError> {
        let raw: api::RouteServiceResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let Some(route) = raw.routes.into_iter().next() else {
            debug!(
                code = raw.code.as_deref().unwrap_or("-"),
                message = raw.message.as_deref().unwrap_or("-"),
                "OSRM returned no routes"
            );
            return Err(RoutingError::NoRouteFound {
                from: start.to_string(),
                to: end.to_string(),
            });
        };

        let coordinates = decode_positions(&route.geometry.coordinates)?;
        let steps = route.legs.into_iter().flat_map(|leg| leg.steps).collect();

        let mut response = RouteResponse::new(
            PROVIDER_NAME,
            coordinates,
            checked_measure(route.distance, "distance")?,
            checked_measure(route.duration, "duration")?,
        );
        response.steps = steps;
        Ok(response)
    }
}

#[async_trait]
impl RoutingClient for OsrmClient {
    #[instrument(skip(self), fields(provider = PROVIDER_NAME))]
    async fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<RouteResponse, RoutingError> {
        let url = self.route_url(start, end);
        let started = Instant::now();

        debug!(url = %url, "Sending OSRM request");

        let request = self.client.get(&url).query(&Self::query_params());
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
            "OSRM route decoded"
        );

        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
