//! Rectangular latitude/longitude region

use serde::{Deserialize, Serialize};

use super::GeoPoint;
use crate::errors::DomainError;

/// An axis-aligned lat/lng rectangle, edges inclusive
///
/// Used to describe the nominal service area. Does not support boxes that
/// cross the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Northern edge (max latitude)
    pub north: f64,
    /// Southern edge (min latitude)
    pub south: f64,
    /// Eastern edge (max longitude)
    pub east: f64,
    /// Western edge (min longitude)
    pub west: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if any edge is out of range or
    /// the box is inverted (south above north, west east of east).
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Result<Self, DomainError> {
        let bbox = Self {
            north,
            south,
            east,
            west,
        };
        bbox.validate()?;
        Ok(bbox)
    }

    /// Mainland France, including Corsica
    #[must_use]
    pub const fn france() -> Self {
        Self {
            north: 51.1,
            south: 41.3,
            east: 9.6,
            west: -5.2,
        }
    }

    /// Validate edge ranges and orientation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` describing the first problem found.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !GeoPoint::is_valid(self.north, self.east) || !GeoPoint::is_valid(self.south, self.west)
        {
            return Err(DomainError::ValidationError(
                "bounding box edges must be valid coordinates".to_string(),
            ));
        }
        if self.south > self.north {
            return Err(DomainError::ValidationError(
                "bounding box south edge must not exceed north edge".to_string(),
            ));
        }
        if self.west > self.east {
            return Err(DomainError::ValidationError(
                "bounding box west edge must not exceed east edge".to_string(),
            ));
        }
        Ok(())
    }

    /// Check whether a point lies inside the box (edges inclusive)
    #[must_use]
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.south..=self.north).contains(&point.lat())
            && (self.west..=self.east).contains(&point.lng())
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::france()
    }
}
