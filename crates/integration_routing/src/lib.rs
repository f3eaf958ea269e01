#![forbid(unsafe_code)]
//! Driving route integration for RouteLink
//!
//! Fetches driving routes from [OpenRouteService](https://openrouteservice.org)
//! and from the public [OSRM](https://project-osrm.org) demo server.
//!
//! # Architecture
//!
//! Both backends implement the common [`RoutingClient`] trait. Each client
//! builds its provider-specific request (both APIs expect `lng,lat` ordering),
//! issues a single HTTP call bounded by the configured timeout and decodes the
//! first returned route into a [`RouteResponse`] whose coordinates are already
//! in canonical `(lat, lng)` order. Choosing between providers is left to the
//! caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::GeoPoint;
//! use integration_routing::{OsrmClient, RoutingClient, RoutingConfig};
//!
//! let config = RoutingConfig::default();
//! let client = OsrmClient::new(&config)?;
//!
//! let route = client.route(GeoPoint::paris(), GeoPoint::lyon()).await?;
//! println!("{} m in {} s", route.distance_meters, route.duration_seconds);
//! ```

mod config;
mod error;
mod models;
mod openrouteservice;
mod osrm;
mod provider;
mod transport;

pub use config::RoutingConfig;
pub use error::RoutingError;
pub use models::RouteResponse;
pub use openrouteservice::OpenRouteServiceClient;
pub use osrm::OsrmClient;
pub use provider::RoutingClient;
