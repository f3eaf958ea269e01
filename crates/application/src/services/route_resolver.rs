//! Route resolution with provider fallback
//!
//! Tries each configured provider in order and returns the first route
//! obtained. Provider errors never escape individually: they are collected
//! and surfaced together once the whole chain is exhausted.

use std::fmt;
use std::sync::Arc;

use domain::{BoundingBox, GeoPoint, NormalizedRoute, RouteQuery, RouteSource};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::error::{ProviderFailure, RouteError};
use crate::ports::RouteProviderPort;

/// Result of one resolution: a route or a single terminal error
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    /// A provider produced a route
    Success(NormalizedRoute),
    /// No route is available
    Failure(RouteError),
}

impl ResolutionOutcome {
    /// Check whether a route was produced
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrow the route, if any
    #[must_use]
    pub const fn route(&self) -> Option<&NormalizedRoute> {
        match self {
            Self::Success(route) => Some(route),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the error, if any
    #[must_use]
    pub const fn error(&self) -> Option<&RouteError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Convert into a `Result` for use with `?`
    pub fn into_result(self) -> Result<NormalizedRoute, RouteError> {
        match self {
            Self::Success(route) => Ok(route),
            Self::Failure(err) => Err(err),
        }
    }
}

impl From<Result<NormalizedRoute, RouteError>> for ResolutionOutcome {
    fn from(result: Result<NormalizedRoute, RouteError>) -> Self {
        match result {
            Ok(route) => Self::Success(route),
            Err(err) => Self::Failure(err),
        }
    }
}

/// Which end of the query a warning refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// The pickup point
    Start,
    /// The destination point
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Advisory signal: a point lies outside the nominal service area
///
/// Resolution still proceeds; route accuracy is merely less certain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ServiceAreaWarning {
    /// Offending endpoint
    pub endpoint: Endpoint,
    /// The point itself
    pub point: GeoPoint,
}

impl fmt::Display for ServiceAreaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} point ({}) lies outside the nominal service area",
            self.endpoint, self.point
        )
    }
}

/// Resolves routes through an ordered chain of providers
///
/// Stateless between calls, so one instance can serve concurrent
/// resolutions behind an `Arc`.
pub struct RouteResolver {
    providers: Vec<Arc<dyn RouteProviderPort>>,
    service_area: BoundingBox,
}

impl fmt::Debug for RouteResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteResolver")
            .field("providers", &self.provider_names())
            .field("service_area", &self.service_area)
            .finish()
    }
}

impl RouteResolver {
    /// Create a resolver; `providers` are tried in the given order
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn RouteProviderPort>>, service_area: BoundingBox) -> Self {
        Self {
            providers,
            service_area,
        }
    }

    /// Names of the configured providers, in fallback order
    #[must_use]
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.provider_name()).collect()
    }

    /// The nominal service area used for advisory warnings
    #[must_use]
    pub const fn service_area(&self) -> BoundingBox {
        self.service_area
    }

    /// Endpoints of `query` lying outside the nominal service area
    #[must_use]
    pub fn service_area_warnings(&self, query: &RouteQuery) -> Vec<ServiceAreaWarning> {
        [(Endpoint::Start, query.start), (Endpoint::End, query.end)]
            .into_iter()
            .filter(|(_, point)| !self.service_area.contains(point))
            .map(|(endpoint, point)| ServiceAreaWarning { endpoint, point })
            .collect()
    }

    /// Resolve a route between two points
    pub async fn resolve(&self, start: GeoPoint, end: GeoPoint) -> ResolutionOutcome {
        self.resolve_query(&RouteQuery::new(start, end)).await
    }

    /// Resolve a route for a prepared query
    ///
    /// Invalid points fail immediately without contacting any provider.
    /// Otherwise providers are tried strictly one after another; the first
    /// success short-circuits the chain.
    #[instrument(skip(self), fields(start = %query.start, end = %query.end))]
    pub async fn resolve_query(&self, query: &RouteQuery) -> ResolutionOutcome {
        if let Err(e) = query.validate() {
            warn!(error = %e, "Rejecting route query");
            return ResolutionOutcome::Failure(e.into());
        }

        for warning in self.service_area_warnings(query) {
            warn!(
                endpoint = %warning.endpoint,
                point = %warning.point,
                "Point outside nominal service area, route accuracy may be degraded"
            );
        }

        let mut failures = Vec::with_capacity(self.providers.len());

        for (index, provider) in self.providers.iter().enumerate() {
            let name = provider.provider_name();
            let role = RouteSource::for_position(index);
            debug!(provider = name, %role, "Requesting route");

            match provider.fetch_route(query).await {
                Ok(route) => {
                    info!(
                        provider = name,
                        %role,
                        points = route.coordinates().len(),
                        "Route calculated successfully"
                    );
                    return ResolutionOutcome::Success(route);
                },
                Err(e) => {
                    warn!(provider = name, %role, error = %e, "Routing provider failed");
                    failures.push(ProviderFailure {
                        provider: name.to_string(),
                        role,
                        error: e,
                    });
                },
            }
        }

        let err = RouteError::AllProvidersFailed { failures };
        error!(error = %err, "Unable to calculate route with any provider");
        ResolutionOutcome::Failure(err)
    }
}
