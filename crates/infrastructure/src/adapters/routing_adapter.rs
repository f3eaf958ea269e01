//! Routing adapter - Implements RouteProviderPort using integration_routing

use std::sync::Arc;

use application::error::ProviderError;
use application::ports::RouteProviderPort;
use async_trait::async_trait;
use domain::{NormalizedRoute, RouteQuery, RouteSource, RouteStep};
use integration_routing::{
    OpenRouteServiceClient, OsrmClient, RouteResponse, RoutingClient, RoutingConfig, RoutingError,
};
use tracing::{debug, instrument};

/// Adapter exposing one routing backend as a route provider
///
/// Normalizes the client's transport errors into the four provider error
/// kinds and tags produced routes with the adapter's role in the chain.
pub struct RoutingAdapter {
    client: Arc<dyn RoutingClient>,
    role: RouteSource,
}

impl std::fmt::Debug for RoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingAdapter")
            .field("provider", &self.client.provider_name())
            .field("role", &self.role)
            .finish()
    }
}

impl RoutingAdapter {
    /// Wrap an existing client
    #[must_use]
    pub fn new(client: Arc<dyn RoutingClient>, role: RouteSource) -> Self {
        Self { client, role }
    }

    /// Create an adapter backed by OpenRouteService
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn openrouteservice(config: &RoutingConfig, role: RouteSource) -> Result<Self, RoutingError> {
        Ok(Self::new(Arc::new(OpenRouteServiceClient::new(config)?), role))
    }

    /// Create an adapter backed by OSRM
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn osrm(config: &RoutingConfig, role: RouteSource) -> Result<Self, RoutingError> {
        Ok(Self::new(Arc::new(OsrmClient::new(config)?), role))
    }

    /// Role this adapter plays in the provider chain
    #[must_use]
    pub const fn role(&self) -> RouteSource {
        self.role
    }

    /// Map integration routing error to provider error
    fn map_error(err: RoutingError) -> ProviderError {
        match err {
            RoutingError::ConnectionFailed(e) => ProviderError::transport(e),
            RoutingError::Timeout { .. } => ProviderError::transport(err.to_string()),
            RoutingError::HttpStatus { status, message } => ProviderError::http(status, message),
            RoutingError::RateLimitExceeded { .. } => ProviderError::http(429, err.to_string()),
            RoutingError::NoRouteFound { .. } => ProviderError::no_route(err.to_string()),
            RoutingError::ParseError(e) => ProviderError::malformed(e),
            RoutingError::ConfigurationError(e) => {
                ProviderError::transport(format!("client misconfigured: {e}"))
            },
        }
    }

    /// Convert a decoded provider response into a normalized route
    fn map_response(&self, response: RouteResponse) -> Result<NormalizedRoute, ProviderError> {
        let steps = response.steps.into_iter().map(RouteStep::new).collect();

        NormalizedRoute::new(
            response.coordinates,
            response.distance_meters,
            response.duration_seconds,
            self.role,
            response.provider,
        )
        .map(|route| route.with_steps(steps))
        .map_err(|e| ProviderError::malformed(e.to_string()))
    }
}

#[async_trait]
impl RouteProviderPort for RoutingAdapter {
    #[instrument(skip(self), fields(provider = self.client.provider_name(), role = %self.role))]
    async fn fetch_route(&self, query: &RouteQuery) -> Result<NormalizedRoute, ProviderError> {
        let response = self
            .client
            .route(query.start, query.end)
            .await
            .map_err(Self::map_error)?;

        debug!(
            points = response.coordinates.len(),
            distance_m = response.distance_meters,
            duration_s = response.duration_seconds,
            response_time_ms = ?response.response_time_ms,
            "Provider returned route"
        );

        self.map_response(response)
    }

    fn provider_name(&self) -> &'static str {
        self.client.provider_name()
    }
}
