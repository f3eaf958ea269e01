//! Application-level errors

use domain::{DomainError, RouteSource};
use serde::Serialize;
use thiserror::Error;

/// Failure reported by a single routing provider
///
/// Every variant triggers fallback to the next provider in the chain.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderError {
    /// Connectivity failure or timeout
    #[error("Transport error: {message}")]
    Transport {
        /// Underlying transport message
        message: String,
    },

    /// Non-success HTTP status
    #[error("Provider returned HTTP {status}: {message}")]
    ProviderHttp {
        /// Response status code
        status: u16,
        /// Error detail from the response body
        message: String,
    },

    /// Provider reachable but found no route between the points
    #[error("No route found: {message}")]
    NoRouteFound {
        /// Provider detail
        message: String,
    },

    /// Response violated the provider's documented contract
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Decoding detail
        message: String,
    },
}

impl ProviderError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::ProviderHttp {
            status,
            message: message.into(),
        }
    }

    /// Create a no-route error
    pub fn no_route(message: impl Into<String>) -> Self {
        Self::NoRouteFound {
            message: message.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }
}

/// One failed attempt within a resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderFailure {
    /// Provider name (e.g., "openrouteservice")
    pub provider: String,
    /// Position of the provider in the chain
    pub role: RouteSource,
    /// What went wrong
    pub error: ProviderError,
}

impl std::fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.provider, self.role, self.error)
    }
}

/// Terminal failure of a route resolution
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteError {
    /// Caller supplied invalid points; no provider was contacted
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Validation detail
        message: String,
    },

    /// Every provider in the chain failed
    #[error("All routing providers failed: {}", summarize(.failures))]
    AllProvidersFailed {
        /// Failures in the order the providers were tried
        failures: Vec<ProviderFailure>,
    },
}

impl RouteError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Diagnostic messages, one per failed provider
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![message.clone()],
            Self::AllProvidersFailed { failures } => {
                failures.iter().map(ToString::to_string).collect()
            },
        }
    }
}

impl From<DomainError> for RouteError {
    fn from(err: DomainError) -> Self {
        Self::invalid_input(err.to_string())
    }
}

fn summarize(failures: &[ProviderFailure]) -> String {
    if failures.is_empty() {
        return "no providers configured".to_string();
    }
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
