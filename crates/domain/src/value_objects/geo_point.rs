//! Geographic point value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A WGS84 point in canonical (latitude, longitude) order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    lat: f64,
    /// Longitude in degrees (-180 to 180)
    lng: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = DomainError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}

impl GeoPoint {
    /// Create a new point with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if either value is NaN or
    /// infinite, latitude is not in [-90, 90] or longitude is not in [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !Self::is_valid(lat, lng) {
            return Err(DomainError::invalid_coordinates(lat, lng));
        }
        Ok(Self { lat, lng })
    }

    /// Create a point from a provider-native `[lng, lat]` pair
    ///
    /// # Errors
    ///
    /// Same conditions as [`GeoPoint::new`].
    pub fn from_lng_lat(lng: f64, lat: f64) -> Result<Self, DomainError> {
        Self::new(lat, lng)
    }

    /// Create a point without validation (for trusted sources)
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180].
    #[must_use]
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check whether a coordinate pair is finite and in range
    #[must_use]
    pub fn is_valid(lat: f64, lng: f64) -> bool {
        lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng)
    }

    /// Get the latitude
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Get the longitude
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Render as the `lng,lat` pair most routing APIs expect
    #[must_use]
    pub fn to_lng_lat_string(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Well-known points used as defaults and in tests
impl GeoPoint {
    /// Paris, Notre-Dame
    #[must_use]
    pub const fn paris() -> Self {
        Self::new_unchecked(48.853, 2.3499)
    }

    /// Lyon, Place Bellecour
    #[must_use]
    pub const fn lyon() -> Self {
        Self::new_unchecked(45.7578, 4.832)
    }
}
