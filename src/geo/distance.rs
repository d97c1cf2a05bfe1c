//! Great-circle distance
//!
//! Haversine distance on a sphere of radius [`EARTH_RADIUS_KM`]. All math is
//! done in `f64`.
//!
//! The haversine term `a` is clamped to `[0, 1]` before taking square roots.
//! Rounding can push `a` a few ULPs past 1 for near-antipodal points, which
//! would otherwise make `sqrt(1 - a)` NaN.

use std::f64::consts::PI;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers
///
/// Inputs are degrees and are not range-checked. Out-of-range values give a
/// defined but meaningless result.
///
/// # Examples
///
/// ```
/// use nearport::geo::haversine_km;
///
/// // Quarter of the equator
/// let d = haversine_km(0.0, 0.0, 0.0, 90.0);
/// assert!((d - 10_007.54).abs() < 0.01);
///
/// assert_eq!(haversine_km(12.5, 45.0, 12.5, 45.0), 0.0);
/// ```
#[inline]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlat = lat2 - lat1;
    let dlon = lon2.to_radians() - lon1.to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();
    let a = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;

    EARTH_RADIUS_KM * central_angle(a)
}

/// Central angle in radians from the haversine term `a`
#[inline]
fn central_angle(a: f64) -> f64 {
    let a = a.clamp(0.0, 1.0);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Half the circumference of the sphere, the largest possible distance
pub const MAX_DISTANCE_KM: f64 = PI * EARTH_RADIUS_KM;
