//! Brute-force nearest-neighbor matching.
//!
//! For each source point, scan the entire target list and keep the
//! target with the smallest great-circle distance. There is no spatial
//! index; the lists this library is built for are small enough that a
//! linear scan is the whole design.

use ordered_float::OrderedFloat;

use crate::error::MatchError;
use crate::location::AsLocation;
use crate::match_result::MatchResult;
use crate::utils::haversine;

/// Matches every source point to its nearest target point.
///
/// The scan starts at `+inf` and replaces the candidate only on a
/// strictly smaller distance, so when two targets are exactly
/// equidistant the first one in the list wins.
///
/// # Arguments
/// * `sources` - The points to find matches for.
/// * `targets` - The candidate points.
///
/// # Returns
/// One [`MatchResult`] per source point, in source order. An empty
/// source list yields an empty vector no matter what the targets are.
///
/// # Errors
/// [`MatchError::EmptyTargetSet`] if `sources` is non-empty but
/// `targets` is empty, since no nearest point exists.
///
/// # Time Complexity
/// *O*(*[sources] x [targets]*).
pub fn match_nearest<'a>(
    sources: &'a [impl AsLocation],
    targets: &'a [impl AsLocation],
) -> Result<Vec<MatchResult<'a>>, MatchError> {
    if sources.is_empty() {
        return Ok(Vec::new());
    }
    if targets.is_empty() {
        return Err(MatchError::EmptyTargetSet);
    }

    let mut results = Vec::with_capacity(sources.len());
    for source in sources {
        let mut min_distance = f64::INFINITY;
        let mut nearest: Option<&dyn AsLocation> = None;
        for target in targets {
            let d = haversine::distance(source.as_location(), target.as_location());
            if d < min_distance {
                min_distance = d;
                nearest = Some(target);
            }
        }
        // targets is non-empty and every distance is < +inf, so a
        // nearest target always exists here.
        if let Some(target) = nearest {
            results.push(MatchResult {
                source,
                target,
                distance_km: OrderedFloat(min_distance),
            });
        }
    }
    Ok(results)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod nearest_tests {
    use super::*;
    use crate::city::City;
    use crate::generator::generate_locations_near;
    use crate::location::Location;

    /// Los Angeles against three European capitals: London wins the
    /// scan at roughly 8756 km (Paris is ~9086 km, Madrid ~9363 km).
    #[test]
    fn test_los_angeles_matches_london() {
        let sources = vec![Location::new(34.0522, -118.2437)];
        let targets = vec![
            Location::new(51.5047, -0.1278), // London
            Location::new(48.8566, 2.3522),  // Paris
            Location::new(40.4168, -3.7038), // Madrid
        ];

        let results = match_nearest(&sources, &targets).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].target.as_location(), &targets[0]);
        assert!((*results[0].distance_km - 8755.8).abs() < 1.0);
    }

    #[test]
    fn test_empty_targets_is_an_error() {
        let sources = vec![Location::new(40.7128, -74.0060)];
        let targets: Vec<Location> = Vec::new();
        assert_eq!(
            match_nearest(&sources, &targets).unwrap_err(),
            MatchError::EmptyTargetSet
        );
    }

    #[test]
    fn test_empty_sources_yields_empty_results() {
        let sources: Vec<Location> = Vec::new();
        let targets = vec![Location::new(51.5047, -0.1278)];
        assert!(match_nearest(&sources, &targets).unwrap().is_empty());

        // An empty source list is not an error even when the target
        // list is empty too.
        let no_targets: Vec<Location> = Vec::new();
        assert!(match_nearest(&sources, &no_targets).unwrap().is_empty());
    }

    /// The first of two exactly equidistant targets wins.
    #[test]
    fn test_tie_break_prefers_first_target() {
        let sources = vec![Location::new(10.0, 10.0)];
        let targets = vec![
            Location::new(20.0, 20.0),
            Location::new(20.0, 20.0),
        ];

        let results = match_nearest(&sources, &targets).unwrap();
        assert!(std::ptr::eq(
            results[0].target.as_location(),
            &targets[0]
        ));
    }

    /// Every result's distance equals the true minimum over the
    /// target list, one result per source, in source order.
    #[test]
    fn test_matches_are_minimal_over_random_points() {
        let sf = Location::new(37.7749, -122.4194);
        let berlin = Location::new(52.5200, 13.4050);
        let sources = generate_locations_near(&sf, 500.0, 30);
        let targets = generate_locations_near(&berlin, 500.0, 30);

        let results = match_nearest(&sources, &targets).unwrap();
        assert_eq!(results.len(), sources.len());
        for (source, result) in sources.iter().zip(&results) {
            assert!(std::ptr::eq(
                result.source.as_location(),
                source.as_location()
            ));
            let true_min = targets
                .iter()
                .map(|t| crate::haversine::distance(source, t))
                .fold(f64::INFINITY, f64::min);
            assert_eq!(*result.distance_km, true_min);
        }
    }

    /// Mixed argument types: named cities as sources, bare coordinates
    /// as targets.
    #[test]
    fn test_city_sources_against_bare_locations() {
        let sources = vec![City::new("New York", "USA", 40.7128, -74.0060)];
        let targets = vec![
            Location::new(48.8566, 2.3522),  // Paris
            Location::new(51.5047, -0.1278), // London
        ];

        let results = match_nearest(&sources, &targets).unwrap();
        assert_eq!(results[0].source.label(), "New York");
        assert_eq!(results[0].target.as_location(), &targets[1]);
        assert!((*results[0].distance_km - 5570.3).abs() < 1.0);
    }
}
