//! Loading and querying the city database.
//!
//! The database is a CSV file with a `Country,City,Latitude,Longitude`
//! header. It is purely a naming aid for presentation; the matcher
//! itself never consults it.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::city::City;
use crate::error::DatabaseError;
use crate::location::Location;

/// One row of the CSV database.
#[derive(Debug, Deserialize)]
struct CityRecord {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
}

/// Reads the city database from any reader.
///
/// # Errors
/// [`DatabaseError::Csv`] on a malformed record.
pub fn read_cities<R: io::Read>(reader: R) -> Result<Vec<City>, DatabaseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut cities = Vec::new();
    for record in csv_reader.deserialize() {
        let record: CityRecord = record?;
        cities.push(City::new(
            &record.city,
            &record.country,
            record.latitude,
            record.longitude,
        ));
    }
    Ok(cities)
}

/// Reads the city database from a file on disk.
///
/// # Errors
/// [`DatabaseError::Io`] if the file cannot be opened,
/// [`DatabaseError::Csv`] on a malformed record.
pub fn load_cities<P: AsRef<Path>>(path: P) -> Result<Vec<City>, DatabaseError> {
    let file = File::open(path)?;
    read_cities(file)
}

/// Looks up a city by its exact coordinates.
///
/// Exact equality is intentional: the database keys cities by the same
/// literal coordinates the rest of the program uses, so there is no
/// tolerance radius to pick.
pub fn find_city<'a>(location: &Location, cities: &'a [City]) -> Option<&'a City> {
    cities.iter().find(|city| city.location == *location)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod database_tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Country,City,Latitude,Longitude
USA,New York,40.7128,-74.0060
USA,Los Angeles,34.0522,-118.2437";

    #[test]
    fn test_read_cities_from_csv() {
        let cities = read_cities(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0], City::new("New York", "USA", 40.7128, -74.0060));
        assert_eq!(cities[1].name, "Los Angeles");
        assert_eq!(cities[1].country, "USA");
    }

    #[test]
    fn test_read_cities_rejects_bad_record() {
        let bad = "Country,City,Latitude,Longitude\nUSA,New York,not-a-number,-74.0060";
        assert!(matches!(
            read_cities(bad.as_bytes()),
            Err(DatabaseError::Csv(_))
        ));
    }

    #[test]
    fn test_find_city_by_exact_coordinates() {
        let cities = read_cities(SAMPLE_CSV.as_bytes()).unwrap();

        let nyc = Location::new(40.7128, -74.0060);
        assert_eq!(find_city(&nyc, &cities).unwrap().name, "New York");

        // A coordinate that is not in the database has no name.
        let nowhere = Location::new(0.0, 0.0);
        assert!(find_city(&nowhere, &cities).is_none());
    }

    #[test]
    fn test_load_cities_missing_file_is_io_error() {
        let result = load_cities("/definitely/not/a/real/path.csv");
        assert!(matches!(result, Err(DatabaseError::Io(_))));
    }
}
