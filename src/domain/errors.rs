//! Error types raised by the panchang core.

use thiserror::Error;

use crate::domain::ephemeris::EphemerisError;

/// Failures that abort a panchang computation.
///
/// Recoverable conditions (unknown city, no sunrise at the location) are not
/// represented here; the services absorb them into the result instead.
#[derive(Debug, Error)]
pub enum PanchangError {
    /// The date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// Latitude or longitude outside the geographic range.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// The city table cannot be used (empty, unknown default, bad entry).
    #[error("invalid city table: {0}")]
    InvalidCityTable(String),

    /// A longitude query failed; there is no fallback for tithi or nakshatra.
    #[error("ephemeris failure: {0}")]
    Ephemeris(#[from] EphemerisError),
}
