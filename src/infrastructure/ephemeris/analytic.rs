use chrono::NaiveDate;

use crate::domain::entities::GeoCoordinate;
use crate::domain::ephemeris::{Body, Ephemeris, EphemerisError, Horizon, RiseSetEvent};

use super::time::julian_day_at_midnight;
use super::zodiac::Zodiac;
use super::{moon, riseset, sun};

/// Series-based Sun and Moon longitudes with SPA sunrise and sunset.
///
/// Rise and set are searched for the Sun only. Lunar rise/set is reported as
/// [`EphemerisError::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris {
    zodiac: Zodiac,
}

impl AnalyticEphemeris {
    pub fn new(zodiac: Zodiac) -> Self {
        Self { zodiac }
    }

    pub fn zodiac(&self) -> Zodiac {
        self.zodiac
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn day_number(&self, date: NaiveDate) -> f64 {
        julian_day_at_midnight(date)
    }

    fn longitude(&self, day_number: f64, body: Body) -> Result<f64, EphemerisError> {
        let tropical = match body {
            Body::Sun => sun::apparent_longitude_deg(day_number),
            Body::Moon => moon::apparent_longitude_deg(day_number),
        };

        let value = tropical - self.zodiac.ayanamsha_deg(day_number);
        if !value.is_finite() {
            return Err(EphemerisError::Computation(format!(
                "non-finite {body} longitude at JD {day_number}"
            )));
        }

        Ok(value.rem_euclid(360.0))
    }

    fn rise_set(
        &self,
        day_number: f64,
        body: Body,
        location: GeoCoordinate,
        event: RiseSetEvent,
        horizon: Horizon,
    ) -> Result<f64, EphemerisError> {
        match body {
            Body::Sun => riseset::sun_crossing(day_number, location, event, horizon),
            Body::Moon => Err(EphemerisError::Unsupported { body }),
        }
    }
}
