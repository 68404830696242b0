//! Great-circle distance via the haversine formula.
//!
//! The haversine formula treats the earth as a sphere of mean radius
//! [`EARTH_RADIUS_KM`]. No ellipsoid correction is applied; the error
//! against WGS84 stays below ~0.5%, which is intentional here.

use crate::location::Location;
use crate::utils::angle::to_radians;

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the great-circle distance between two locations in
/// kilometers.
///
/// Coordinate bounds are not validated: NaN and out-of-range degrees
/// flow through the formula unchanged.
///
/// # Arguments
/// * `from` - One end of the arc.
/// * `to` - The other end of the arc.
///
/// # Returns
/// The distance in kilometers. Finite and non-negative for any finite
/// inputs, and symmetric in its arguments up to floating-point
/// rounding.
pub fn distance(from: &Location, to: &Location) -> f64 {
    let d_lat = to_radians(*to.latitude - *from.latitude);
    let d_lon = to_radians(*to.longitude - *from.longitude);

    let lat1 = to_radians(*from.latitude);
    let lat2 = to_radians(*to.latitude);

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair outside [0, 1] for identical or
    // near-antipodal points, which would make sqrt(1 - a) NaN.
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
