//! Ports - Interfaces implemented by infrastructure adapters

mod route_provider_port;

pub use route_provider_port::RouteProviderPort;
#[cfg(test)]
pub use route_provider_port::MockRouteProviderPort;
