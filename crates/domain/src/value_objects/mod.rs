//! Value Objects - Immutable, identity-less domain primitives

mod bounding_box;
mod geo_point;
mod route_query;

pub use bounding_box::BoundingBox;
pub use geo_point::GeoPoint;
pub use route_query::RouteQuery;
