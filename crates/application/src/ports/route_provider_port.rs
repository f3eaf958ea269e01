//! Routing provider port
//!
//! Defines the single capability every routing backend exposes to the
//! resolver. Adapters in the infrastructure layer implement this port on top
//! of concrete HTTP clients.

use async_trait::async_trait;
use domain::{NormalizedRoute, RouteQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ProviderError;

/// Port for fetching a route from one provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RouteProviderPort: Send + Sync {
    /// Fetch the first route the provider offers for `query`
    ///
    /// Implementations make at most one network call, never retry, and
    /// return coordinates in canonical `(lat, lng)` order.
    async fn fetch_route(&self, query: &RouteQuery) -> Result<NormalizedRoute, ProviderError>;

    /// Short provider name used in logs and diagnostics
    fn provider_name(&self) -> &'static str;
}
