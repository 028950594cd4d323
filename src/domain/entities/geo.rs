//! Geographic coordinate value object.

use serde::{Deserialize, Serialize};

use crate::domain::errors::PanchangError;

/// A point on Earth's surface in degrees.
///
/// Latitude is north-positive in [-90, 90], longitude east-positive in
/// [-180, 180]. Values are checked on construction through [`Self::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate after range validation.
    ///
    /// # Errors
    ///
    /// Returns [`PanchangError::InvalidCoordinate`] for out-of-range or
    /// non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PanchangError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if !valid {
            return Err(PanchangError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}
