//! Built-in sample city lists.
//!
//! Five American and five European cities, used by the demo binary and
//! as fixtures in tests. They are sample data supplied to the matcher
//! like any other caller's lists; nothing in the core knows about
//! them.

use once_cell::sync::Lazy;

use crate::city::City;

/// Five large American cities.
pub static AMERICAN_CITIES: Lazy<Vec<City>> = Lazy::new(|| {
    vec![
        City::new("New York", "USA", 40.7128, -74.0060),
        City::new("Los Angeles", "USA", 34.0522, -118.2437),
        City::new("Chicago", "USA", 41.8781, -87.6298),
        City::new("San Francisco", "USA", 37.7749, -122.4194),
        City::new("Miami", "USA", 25.7617, -80.1918),
    ]
});

/// Five European capitals.
pub static EUROPEAN_CITIES: Lazy<Vec<City>> = Lazy::new(|| {
    vec![
        City::new("London", "UK", 51.5047, -0.1278),
        City::new("Paris", "France", 48.8566, 2.3522),
        City::new("Berlin", "Germany", 52.5200, 13.4050),
        City::new("Rome", "Italy", 41.9028, 12.4964),
        City::new("Madrid", "Spain", 40.4168, -3.7038),
    ]
});
