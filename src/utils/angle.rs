//! Degree/radian conversion.

use std::f64::consts::PI;

/// Converts an angle in decimal degrees to radians.
///
/// Pure and total: defined for every finite input, no side effects.
///
/// # Arguments
/// * `degrees` - An angle in decimal degrees.
///
/// # Returns
/// The same angle in radians, `degrees * PI / 180`.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
