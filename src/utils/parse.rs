//! Parsing of coordinate text.
//!
//! Accepts plain decimal degrees (`51.5074`, `-0.1278`) and the
//! directional format (`40.7128° N`, `74.0060 W`, with an optional
//! `degrees` suffix). A `S` or `W` direction negates the value; `N`
//! and `E` keep it. Range validation is deliberately absent -- a
//! parsed `200, -300` is a perfectly good [`Location`] here.

use std::str::FromStr;

use crate::error::ParseError;
use crate::location::Location;

/// Parses a single latitude or longitude value in decimal degrees.
///
/// # Arguments
/// * `text` - The coordinate text, e.g. `40.7128° N` or `-0.1278`.
///
/// # Errors
/// [`ParseError::InvalidCoordinate`] if no degree value can be read.
pub fn parse_degrees(text: &str) -> Result<f64, ParseError> {
    let cleaned = text.trim().to_lowercase().replace("degrees", "");
    let cleaned = cleaned.trim();

    // Plain decimal format, possibly signed.
    if let Ok(value) = cleaned.parse::<f64>() {
        return Ok(value);
    }

    // Directional format: value, optional degree sign, direction.
    let (body, direction) = match cleaned.chars().last() {
        Some(c @ ('n' | 's' | 'e' | 'w')) => (&cleaned[..cleaned.len() - 1], Some(c)),
        _ => (cleaned, None),
    };
    let body = body.trim().trim_end_matches('°').trim();
    let value = body
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidCoordinate(text.trim().to_string()))?;

    match direction {
        Some('s') | Some('w') => Ok(-value),
        _ => Ok(value),
    }
}

impl FromStr for Location {
    type Err = ParseError;

    /// Parses a `latitude, longitude` pair, each side in any format
    /// [`parse_degrees`] accepts.
    fn from_str(s: &str) -> Result<Location, ParseError> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| ParseError::InvalidPair(s.to_string()))?;
        if lon.contains(',') {
            return Err(ParseError::InvalidPair(s.to_string()));
        }
        Ok(Location::new(parse_degrees(lat)?, parse_degrees(lon)?))
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
