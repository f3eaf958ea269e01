//! Infrastructure layer - Adapters for external systems
//!
//! Implements the routing port on top of the HTTP clients in
//! `integration_routing`, loads the application configuration and installs
//! the tracing subscriber.

pub mod adapters;
pub mod config;
pub mod resolver_factory;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, LoggingConfig, OpenRouteServiceAppConfig, OsrmAppConfig, RoutingAppConfig,
};
pub use resolver_factory::{FactoryError, build_route_resolver};
pub use telemetry::{TelemetryError, init_tracing};
