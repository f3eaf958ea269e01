//! Application services - Use case implementations

pub mod route_formatter;
mod route_resolver;

pub use route_formatter::{format_distance, format_duration, format_route_summary};
pub use route_resolver::{Endpoint, ResolutionOutcome, RouteResolver, ServiceAreaWarning};
