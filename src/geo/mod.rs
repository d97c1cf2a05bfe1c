//! Geographic coordinates
//!
//! This module provides the `Coordinate` value type used throughout nearport
//! and the great-circle distance metric in [`distance`].
//!
//! Coordinates are plain values: two coordinates are equal when their latitude
//! and longitude are equal. Construction through [`Coordinate::new`] does not
//! validate; use [`Coordinate::validated`] at trust boundaries (CLI input,
//! search targets) where out-of-range values must be rejected.
//!
//! # Example
//!
//! ```
//! use nearport::geo::Coordinate;
//!
//! let atl = Coordinate::new(33.6407, -84.4277);
//! let jfk = Coordinate::new(40.6413, -73.7781);
//!
//! let km = atl.distance_km(&jfk);
//! assert!((km - 1221.9).abs() < 1.0);
//! ```

pub mod distance;

pub use distance::{haversine_km, EARTH_RADIUS_KM};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum valid latitude in degrees
pub const MIN_LAT: f64 = -90.0;
/// Maximum valid latitude in degrees
pub const MAX_LAT: f64 = 90.0;
/// Minimum valid longitude in degrees
pub const MIN_LON: f64 = -180.0;
/// Maximum valid longitude in degrees
pub const MAX_LON: f64 = 180.0;

/// Error returned when a coordinate is outside the physical range
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
}

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate without range checks
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Create a coordinate, rejecting non-finite or out-of-range values
    ///
    /// # Examples
    ///
    /// ```
    /// use nearport::geo::{Coordinate, CoordError};
    ///
    /// assert!(Coordinate::validated(51.47, -0.4543).is_ok());
    /// assert_eq!(
    ///     Coordinate::validated(91.0, 0.0),
    ///     Err(CoordError::InvalidLatitude(91.0))
    /// );
    /// ```
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        let coord = Self::new(latitude, longitude);
        coord.validate()?;
        Ok(coord)
    }

    /// Check that latitude and longitude are finite and in range
    pub fn validate(&self) -> Result<(), CoordError> {
        // RangeInclusive::contains is false for NaN
        if !(MIN_LAT..=MAX_LAT).contains(&self.latitude) {
            return Err(CoordError::InvalidLatitude(self.latitude));
        }
        if !(MIN_LON..=MAX_LON).contains(&self.longitude) {
            return Err(CoordError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }

    /// Great-circle distance to `other` in kilometers
    #[inline]
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        let a = Coordinate::new(33.6407, -84.4277);
        let b = Coordinate::from((33.6407, -84.4277));
        assert_eq!(a, b);
        assert_ne!(a, Coordinate::new(33.6407, -84.4278));
    }

    #[test]
    fn test_validate_bounds_inclusive() {
        assert!(Coordinate::validated(90.0, 180.0).is_ok());
        assert!(Coordinate::validated(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert_eq!(
            Coordinate::validated(-90.5, 0.0),
            Err(CoordError::InvalidLatitude(-90.5))
        );
        assert_eq!(
            Coordinate::validated(0.0, 180.1),
            Err(CoordError::InvalidLongitude(180.1))
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(matches!(
            Coordinate::validated(f64::NAN, 0.0),
            Err(CoordError::InvalidLatitude(_))
        ));
        assert!(matches!(
            Coordinate::validated(0.0, f64::INFINITY),
            Err(CoordError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn test_display() {
        let c = Coordinate::new(33.6407, -84.4277);
        assert_eq!(c.to_string(), "(33.6407, -84.4277)");
    }
}
