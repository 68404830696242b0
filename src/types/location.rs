//! Struct definitions and implementations for [`Location`].
//!
//! A `Location` is the bare coordinate pair everything else in this
//! library is built on. Named places such as a
//! [`City`](`super::city::City`) wrap a `Location` and expose it
//! through the [`AsLocation`] trait.

use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] is a geographic position expressed as a latitude and
/// a longitude, both in decimal degrees.
///
/// Latitude is conventionally in `[-90, 90]` and longitude in
/// `[-180, 180]`, but the bounds are not enforced anywhere in this
/// library; out-of-range and degenerate values flow through the
/// numeric formulas unchanged.
///
/// Fields are [`OrderedFloat`] so that locations are `Eq` and `Hash`
/// and can be used as lookup keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Creates a location from plain degree values.
    pub fn new(latitude: f64, longitude: f64) -> Location {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }
}

/// Since Rust doesn't allow for inheritance, we use a `trait` to allow
/// passing "Location-like" objects to functions.
///
/// The matcher accepts any slice of `AsLocation` implementors, so it
/// works the same over bare coordinates and over named places.
pub trait AsLocation: fmt::Debug {
    /// Returns the [`Location`] that an object "extends".
    fn as_location(&self) -> &Location;

    /// A human-readable label for presentation output.
    fn label(&self) -> String;
}

impl AsLocation for Location {
    fn as_location(&self) -> &Location {
        self
    }

    fn label(&self) -> String {
        format!("({:.4}, {:.4})", self.latitude, self.longitude)
    }
}
