//! Routing client trait

use async_trait::async_trait;
use domain::GeoPoint;

use crate::{RouteResponse, RoutingError};

/// Trait for routing backends
///
/// Implemented by every provider client (OpenRouteService, OSRM, ...).
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Fetch the first driving route between two points
    ///
    /// Makes exactly one HTTP call, bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, an empty
    /// route list or a response that cannot be decoded.
    async fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<RouteResponse, RoutingError>;

    /// Get the provider name (e.g., "openrouteservice", "osrm")
    fn provider_name(&self) -> &'static str;
}
