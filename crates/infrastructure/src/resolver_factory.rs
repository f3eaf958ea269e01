//! Wiring of the provider chain into a [`RouteResolver`]

use std::sync::Arc;

use application::ports::RouteProviderPort;
use application::RouteResolver;
use domain::RouteSource;
use integration_routing::RoutingError;
use tracing::info;

use crate::adapters::RoutingAdapter;
use crate::config::AppConfig;

/// Errors raised while assembling the resolver
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// An HTTP client could not be constructed
    #[error("Failed to initialize {provider} client: {source}")]
    Client {
        /// Provider whose client failed
        provider: &'static str,
        /// Underlying error
        #[source]
        source: RoutingError,
    },
}

/// Build the enabled providers in fallback order
///
/// OpenRouteService comes first when enabled, OSRM second. Roles follow
/// the resulting positions, so a lone OSRM acts as primary.
///
/// # Errors
///
/// Returns an error if a client cannot be initialized.
pub fn build_providers(config: &AppConfig) -> Result<Vec<Arc<dyn RouteProviderPort>>, FactoryError> {
    let mut providers: Vec<Arc<dyn RouteProviderPort>> = Vec::with_capacity(2);
    let routing = &config.routing;

    if routing.openrouteservice.enabled {
        let role = RouteSource::for_position(providers.len());
        let adapter = RoutingAdapter::openrouteservice(
            &routing.openrouteservice.to_routing_config(),
            role,
        )
        .map_err(|source| FactoryError::Client {
            provider: "openrouteservice",
            source,
        })?;
        providers.push(Arc::new(adapter));
    }

    if routing.osrm.enabled {
        let role = RouteSource::for_position(providers.len());
        let adapter = RoutingAdapter::osrm(&routing.osrm.to_routing_config(), role).map_err(
            |source| FactoryError::Client {
                provider: "osrm",
                source,
            },
        )?;
        providers.push(Arc::new(adapter));
    }

    Ok(providers)
}

/// Build a resolver from validated configuration
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a client cannot be
/// initialized.
pub fn build_route_resolver(config: &AppConfig) -> Result<RouteResolver, FactoryError> {
    config.validate()?;

    let resolver = RouteResolver::new(build_providers(config)?, config.service_area);
    info!(
        providers = ?resolver.provider_names(),
        has_api_key = config.routing.openrouteservice.api_key.is_some(),
        "Route resolver ready"
    );
    Ok(resolver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chain_is_openrouteservice_then_osrm() {
        let resolver = build_route_resolver(&AppConfig::default()).unwrap();
        assert_eq!(resolver.provider_names(), vec!["openrouteservice", "osrm"]);
    }

    #[test]
    fn disabled_primary_promotes_osrm() {
        let mut config = AppConfig::default();
        config.routing.openrouteservice.enabled = false;

        let providers = build_providers(&config).unwrap();
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].provider_name(), "osrm");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.routing.openrouteservice.enabled = false;
        config.routing.osrm.enabled = false;

        let err = build_route_resolver(&config).unwrap_err();
        assert!(matches!(err, FactoryError::Config(_)));
    }
}
