//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod routing_adapter;

pub use routing_adapter::RoutingAdapter;
