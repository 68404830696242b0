//! Error types for the matcher, the coordinate parser, and the city
//! database.

use std::io;

use thiserror::Error;

/// Errors raised by [`match_nearest`](`crate::nearest::match_nearest`).
///
/// Degenerate coordinates, NaN, and out-of-range angles are not
/// errors; they are accepted and processed per the numeric semantics
/// of the haversine formula.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The target list is empty, so no nearest point can be selected.
    #[error("cannot match against an empty target set")]
    EmptyTargetSet,
}

/// Errors raised when parsing coordinate text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A single latitude or longitude value could not be read.
    #[error("invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    /// A `lat, lon` pair was not two comma-separated values.
    #[error("expected a `latitude, longitude` pair: {0}")]
    InvalidPair(String),
}

/// Errors raised when loading the city database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("could not read city database: {0}")]
    Io(#[from] io::Error),

    #[error("malformed city database record: {0}")]
    Csv(#[from] csv::Error),
}
