//! Definition of the `MatchResult` type.
use ordered_float::OrderedFloat;

use crate::location::AsLocation;

/// A match result associates one source point with the nearest target
/// point and the great-circle distance between them.
///
/// Results borrow from the slices handed to
/// [`match_nearest`](`crate::nearest::match_nearest`) and are created
/// transiently per source point; nothing is persisted.
#[derive(Debug)]
pub struct MatchResult<'a> {
    /// The source point this result was computed for.
    pub source: &'a dyn AsLocation,

    /// The nearest target point.
    pub target: &'a dyn AsLocation,

    /// Great-circle distance between the two, in kilometers. Always a
    /// finite non-negative value for finite inputs.
    pub distance_km: OrderedFloat<f64>,
}
