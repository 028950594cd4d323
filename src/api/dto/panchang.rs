//! DTOs for the panchang endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use crate::application::services::PanchangRequest;
use crate::domain::entities::{GeoCoordinate, PanchangRecord};
use crate::domain::errors::PanchangError;

/// Shape check only; calendar validity is decided when the date is parsed.
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Query parameters of `GET /api/panchang`.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PanchangQuery {
    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(regex(path = "*DATE_REGEX", message = "Date must be YYYY-MM-DD"))]
    pub date: Option<String>,

    /// Accepted for compatibility; labels are always English.
    pub lang: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: Option<f64>,
}

impl PanchangQuery {
    /// Converts the query into a service request.
    ///
    /// # Errors
    ///
    /// Returns [`PanchangError::InvalidCoordinate`] when only one of `lat` /
    /// `lon` is given or the pair is out of range.
    pub fn into_request(self) -> Result<PanchangRequest, PanchangError> {
        let coordinate = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoCoordinate::new(lat, lon)?),
            (None, None) => None,
            (lat, lon) => {
                return Err(PanchangError::InvalidCoordinate {
                    latitude: lat.unwrap_or(f64::NAN),
                    longitude: lon.unwrap_or(f64::NAN),
                });
            }
        };

        Ok(PanchangRequest {
            city: self.city,
            date: self.date,
            coordinate,
        })
    }
}

/// Successful panchang response; every value is display text.
#[derive(Debug, Serialize)]
pub struct PanchangResponse {
    pub city: String,
    pub date: String,
    pub weekday: String,
    pub sunrise: String,
    pub sunset: String,
    pub tithi: String,
    pub paksha: String,
    pub nakshatra: String,
    pub rahu_kaal: String,
}

impl From<&PanchangRecord> for PanchangResponse {
    fn from(record: &PanchangRecord) -> Self {
        Self {
            city: record.city.clone(),
            date: record.date.format("%Y-%m-%d").to_string(),
            weekday: record.weekday_name().to_string(),
            sunrise: record.sunrise.to_string(),
            sunset: record.sunset.to_string(),
            tithi: record.tithi.name().to_string(),
            paksha: record.paksha().to_string(),
            nakshatra: record.nakshatra.name().to_string(),
            rahu_kaal: record.rahu_kaal.to_string(),
        }
    }
}
