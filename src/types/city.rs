//! Struct definitions and implementations for [`City`].
//!
//! A city is the one named place this library ships with, but any
//! object a caller wants to match only needs to implement
//! [`AsLocation`] -- a port, a warehouse, or a weather station would
//! work just as well.

use serde::{Deserialize, Serialize};

use super::location::{AsLocation, Location};

/// A named place in the city database.
///
/// Cities come from the CSV database
/// (see [`crate::database`]) or from the built-in sample lists
/// (see [`crate::samples`]). Equality is full-struct equality; lookup
/// by coordinates goes through [`crate::database::find_city`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
    pub location: Location,
}

impl City {
    /// Creates a city from its name, country, and coordinate pair in
    /// degrees.
    pub fn new(name: &str, country: &str, latitude: f64, longitude: f64) -> City {
        City {
            name: name.to_string(),
            country: country.to_string(),
            location: Location::new(latitude, longitude),
        }
    }
}

impl AsLocation for City {
    fn as_location(&self) -> &Location {
        &self.location
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
