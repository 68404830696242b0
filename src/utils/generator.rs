//! Helper functions for generating random locations.
//!
//! Only used to build fixtures for tests; nothing in the matching path
//! depends on randomness.

use rand::Rng;
use std::f64::consts::TAU;

use crate::location::Location;
use crate::utils::angle::to_radians;

/// Kilometers per degree of latitude on the reference sphere.
const KM_PER_DEGREE: f64 = 111.195;

/// Generates random locations scattered around a center point.
///
/// The scatter uses a flat-earth approximation that degrades near the
/// poles; good enough for fixtures, not for navigation.
///
/// # Arguments
/// * `center` - The point to scatter around.
/// * `radius_km` - Approximate maximum distance from the center.
/// * `capacity` - How many locations to generate.
pub fn generate_locations_near(center: &Location, radius_km: f64, capacity: i32) -> Vec<Location> {
    let mut rng = rand::thread_rng();
    let mut locations = Vec::with_capacity(capacity as usize);
    for _ in 0..capacity {
        let bearing = rng.gen_range(0.0..TAU);
        let offset_km = radius_km * rng.gen_range(0.0f64..1.0).sqrt();
        let latitude = (*center.latitude + offset_km * bearing.cos() / KM_PER_DEGREE)
            .clamp(-89.0, 89.0);
        let longitude = *center.longitude
            + offset_km * bearing.sin() / (KM_PER_DEGREE * to_radians(latitude).cos());
        locations.push(Location::new(latitude, longitude));
    }
    locations
}
