//! Domain layer for RouteLink
//!
//! Contains the geographic value objects and the normalized route entity.
//! This layer performs no I/O and defines the ubiquitous language shared by
//! the routing providers and the resolver.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
