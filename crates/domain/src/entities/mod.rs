//! Entities - Route results produced by the routing providers

mod normalized_route;

pub use normalized_route::{NormalizedRoute, RouteSource, RouteStep};
