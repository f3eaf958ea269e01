//! Application layer - Use cases and orchestration
//!
//! Defines the routing provider port and the route resolver that walks an
//! ordered chain of providers, falling back on failure. Also hosts the pure
//! formatting helpers used by presentation code.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ProviderError, ProviderFailure, RouteError};
pub use ports::*;
pub use services::*;
