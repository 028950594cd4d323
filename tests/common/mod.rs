#![allow(dead_code)]

use chrono::NaiveDate;
use std::sync::Arc;

use panchang_api::domain::entities::{City, CityDirectory, GeoCoordinate};
use panchang_api::domain::ephemeris::{Body, Ephemeris, EphemerisError, Horizon, RiseSetEvent};
use panchang_api::infrastructure::cities::{DEFAULT_CITY, builtin_cities};
use panchang_api::infrastructure::ephemeris::{AnalyticEphemeris, julian_day_at_midnight};
use panchang_api::state::AppState;

pub const IST: f64 = 5.5;

/// Ephemeris stub returning fixed longitudes and UT rise/set hours.
#[derive(Debug, Clone)]
pub struct FixedEphemeris {
    pub sun: f64,
    pub moon: f64,
    /// UT hours after 0h of the day; `None` means the sun never rises.
    pub daylight: Option<(f64, f64)>,
    pub fail_longitude: bool,
}

impl FixedEphemeris {
    /// Sun 100, Moon 350: Shashthi (waning), Revati. Local 06:00 to 18:00.
    pub fn daylight() -> Self {
        Self {
            sun: 100.0,
            moon: 350.0,
            daylight: Some((0.5, 12.5)),
            fail_longitude: false,
        }
    }

    pub fn polar_night() -> Self {
        Self {
            daylight: None,
            ..Self::daylight()
        }
    }

    pub fn broken() -> Self {
        Self {
            fail_longitude: true,
            ..Self::daylight()
        }
    }
}

impl Ephemeris for FixedEphemeris {
    fn day_number(&self, date: NaiveDate) -> f64 {
        julian_day_at_midnight(date)
    }

    fn longitude(&self, _day_number: f64, body: Body) -> Result<f64, EphemerisError> {
        if self.fail_longitude {
            return Err(EphemerisError::Computation("ephemeris data unreachable".into()));
        }
        Ok(match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
        })
    }

    fn rise_set(
        &self,
        day_number: f64,
        body: Body,
        _location: GeoCoordinate,
        event: RiseSetEvent,
        _horizon: Horizon,
    ) -> Result<f64, EphemerisError> {
        let (rise, set) = self.daylight.ok_or(EphemerisError::NeverRises { body })?;
        let hours = if event.is_rising() { rise } else { set };
        Ok(day_number + hours / 24.0)
    }
}

pub fn test_cities() -> Arc<CityDirectory> {
    Arc::new(
        CityDirectory::new(
            vec![
                City::new("delhi", 28.6139, 77.2090),
                City::new("varanasi", 25.3176, 82.9739),
                City::new("tromso", 69.6496, 18.9560),
            ],
            "delhi",
        )
        .unwrap(),
    )
}

pub fn create_test_state(ephemeris: FixedEphemeris) -> AppState {
    AppState::new(Arc::new(ephemeris), test_cities(), IST)
}

/// State backed by the real analytic ephemeris and built-in cities.
pub fn create_analytic_state() -> AppState {
    let cities = CityDirectory::new(builtin_cities(), DEFAULT_CITY).unwrap();
    AppState::new(Arc::new(AnalyticEphemeris::default()), Arc::new(cities), IST)
}
