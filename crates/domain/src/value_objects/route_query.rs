//! Start/end pair for a single route resolution

use serde::{Deserialize, Serialize};

use super::GeoPoint;
use crate::errors::DomainError;

/// A request to route from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteQuery {
    /// Pickup point
    pub start: GeoPoint,
    /// Destination point
    pub end: GeoPoint,
}

impl RouteQuery {
    /// Create a query from two validated points
    #[must_use]
    pub const fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self { start, end }
    }

    /// Create a query from raw `(lat, lng)` values, validating both points
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` for the first invalid point.
    pub fn from_coordinates(
        start_lat: f64,
        start_lng: f64,
        end_lat: f64,
        end_lng: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            start: GeoPoint::new(start_lat, start_lng)?,
            end: GeoPoint::new(end_lat, end_lng)?,
        })
    }

    /// Re-check both endpoints
    ///
    /// Points built with [`GeoPoint::new_unchecked`] may carry invalid values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` for the first invalid point.
    pub fn validate(&self) -> Result<(), DomainError> {
        for point in [self.start, self.end] {
            if !GeoPoint::is_valid(point.lat(), point.lng()) {
                return Err(DomainError::invalid_coordinates(point.lat(), point.lng()));
            }
        }
        Ok(())
    }
}
