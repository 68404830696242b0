//! Great-Circle Matching Library.
//! Computes haversine distances between geographic coordinates and
//! matches each point of a source list to the nearest point of a
//! target list.

mod types {
    pub mod city;
    pub mod error;
    pub mod location;
    pub mod match_result;
}

mod algorithms {
    pub mod nearest;
}

mod utils {
    pub mod angle;
    pub mod database;
    pub mod generator;
    pub mod haversine;
    pub mod parse;
    pub mod samples;
}

pub use algorithms::nearest;
pub use types::{city, error, location, match_result};
pub use utils::{angle, database, generator, haversine, parse, samples};
