//! Provider-agnostic route result

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoPoint;

/// Position of the producing provider in the fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    /// The preferred provider
    Primary,
    /// A fallback provider
    Secondary,
}

impl RouteSource {
    /// Role of the provider at `index` in a fallback chain
    #[must_use]
    pub const fn for_position(index: usize) -> Self {
        if index == 0 {
            Self::Primary
        } else {
            Self::Secondary
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for RouteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A turn-by-turn step, passed through from the provider uninterpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteStep(serde_json::Value);

impl RouteStep {
    /// Wrap a raw provider step
    #[must_use]
    pub const fn new(raw: serde_json::Value) -> Self {
        Self(raw)
    }

    /// Borrow the raw provider payload
    #[must_use]
    pub const fn raw(&self) -> &serde_json::Value {
        &self.0
    }

    /// Unwrap into the raw provider payload
    #[must_use]
    pub fn into_raw(self) -> serde_json::Value {
        self.0
    }
}

/// A driving route in canonical (lat, lng) order
///
/// Built once by a provider adapter and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRoute {
    coordinates: Vec<GeoPoint>,
    distance_meters: f64,
    duration_seconds: f64,
    source_provider: RouteSource,
    provider_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    raw_steps: Vec<RouteStep>,
}

impl NormalizedRoute {
    /// Create a route result
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if distance or duration is
    /// negative, NaN or infinite.
    pub fn new(
        coordinates: Vec<GeoPoint>,
        distance_meters: f64,
        duration_seconds: f64,
        source_provider: RouteSource,
        provider_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !distance_meters.is_finite() || distance_meters < 0.0 {
            return Err(DomainError::ValidationError(format!(
                "route distance must be a non-negative number, got {distance_meters}"
            )));
        }
        if !duration_seconds.is_finite() || duration_seconds < 0.0 {
            return Err(DomainError::ValidationError(format!(
                "route duration must be a non-negative number, got {duration_seconds}"
            )));
        }

        Ok(Self {
            coordinates,
            distance_meters,
            duration_seconds,
            source_provider,
            provider_name: provider_name.into(),
            raw_steps: Vec::new(),
        })
    }

    /// Attach turn-by-turn steps
    #[must_use]
    pub fn with_steps(mut self, steps: Vec<RouteStep>) -> Self {
        self.raw_steps = steps;
        self
    }

    /// Route polyline, start to end
    #[must_use]
    pub fn coordinates(&self) -> &[GeoPoint] {
        &self.coordinates
    }

    /// Total distance in meters
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Total duration in seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Which position in the chain produced this route
    #[must_use]
    pub const fn source_provider(&self) -> RouteSource {
        self.source_provider
    }

    /// Name of the backend that produced this route (e.g. "osrm")
    #[must_use]
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Provider-specific steps, possibly empty
    #[must_use]
    pub fn raw_steps(&self) -> &[RouteStep] {
        &self.raw_steps
    }
}
