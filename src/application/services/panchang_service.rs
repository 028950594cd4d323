//! Daily panchang composition service.

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use tracing::debug;

use crate::domain::calendar::{Nakshatra, Tithi, rahu_kaal};
use crate::domain::entities::{CityDirectory, GeoCoordinate, PanchangRecord, ResolvedCity};
use crate::domain::ephemeris::{Body, Ephemeris};
use crate::domain::errors::PanchangError;
use crate::utils::title_case::title_case;

use super::solar_window_service::SolarWindowService;

/// Label used when coordinates are supplied without a city name.
pub const CUSTOM_LOCATION: &str = "Custom Location";

/// Input of one panchang computation.
#[derive(Debug, Clone, Default)]
pub struct PanchangRequest {
    /// City name, matched case-insensitively; unknown names use the default.
    pub city: Option<String>,
    /// `YYYY-MM-DD`; today at the configured offset when absent.
    pub date: Option<String>,
    /// Explicit location overriding the city lookup.
    pub coordinate: Option<GeoCoordinate>,
}

/// Composes the daily panchang record.
///
/// The solar window and the lunar categories are computed independently: a
/// missing sunrise never prevents tithi or nakshatra, and rahu kaal is only
/// derived from an available solar window.
pub struct PanchangService<E: Ephemeris + ?Sized> {
    ephemeris: Arc<E>,
    cities: Arc<CityDirectory>,
    solar: SolarWindowService<E>,
}

impl<E: Ephemeris + ?Sized> PanchangService<E> {
    /// Creates a new panchang service.
    pub fn new(ephemeris: Arc<E>, cities: Arc<CityDirectory>, tz_offset_hours: f64) -> Self {
        let solar = SolarWindowService::new(Arc::clone(&ephemeris), tz_offset_hours);
        Self {
            ephemeris,
            cities,
            solar,
        }
    }

    pub fn cities(&self) -> &CityDirectory {
        &self.cities
    }

    pub fn tz_offset_hours(&self) -> f64 {
        self.solar.tz_offset_hours()
    }

    /// Computes the panchang for a request.
    ///
    /// # Errors
    ///
    /// Returns [`PanchangError::InvalidDate`] for a malformed date and
    /// [`PanchangError::Ephemeris`] when a longitude query fails. An unknown
    /// city or a missing sunrise are not errors.
    pub fn compute(&self, request: &PanchangRequest) -> Result<PanchangRecord, PanchangError> {
        metrics::counter!("panchang_requests_total").increment(1);

        let date = match request.date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => self.today(),
        };
        let location = self.locate(request);

        self.compute_for(location.name, location.coordinate, date)
    }

    /// Computes the panchang for an already resolved location and date.
    ///
    /// # Errors
    ///
    /// Returns [`PanchangError::Ephemeris`] when a longitude query fails.
    pub fn compute_for(
        &self,
        city: String,
        coordinate: GeoCoordinate,
        date: NaiveDate,
    ) -> Result<PanchangRecord, PanchangError> {
        let weekday = date.weekday();

        let window = self.solar.window(coordinate, date);
        let rahu_kaal = rahu_kaal(
            weekday,
            window.sunrise().at_minute_precision(),
            window.sunset().at_minute_precision(),
        );

        let day_number = self.ephemeris.day_number(date);
        let sun = self.ephemeris.longitude(day_number, Body::Sun)?;
        let moon = self.ephemeris.longitude(day_number, Body::Moon)?;

        Ok(PanchangRecord {
            city,
            coordinate,
            date,
            weekday,
            sunrise: window.sunrise(),
            sunset: window.sunset(),
            tithi: Tithi::from_longitudes(sun, moon),
            nakshatra: Nakshatra::from_longitude(moon),
            rahu_kaal,
        })
    }

    /// Today's civil date at the configured offset.
    pub fn today(&self) -> NaiveDate {
        let offset_seconds = (self.tz_offset_hours() * 3600.0).round() as i64;
        (Utc::now() + Duration::seconds(offset_seconds)).date_naive()
    }

    fn locate(&self, request: &PanchangRequest) -> ResolvedCity {
        if let Some(coordinate) = request.coordinate {
            let name = request
                .city
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map_or_else(|| CUSTOM_LOCATION.to_string(), title_case);

            return ResolvedCity {
                name,
                coordinate,
                fallback: false,
            };
        }

        let resolved = self.cities.resolve(request.city.as_deref());
        if resolved.fallback {
            debug!(
                requested = request.city.as_deref().unwrap_or_default(),
                used = %resolved.name,
                "Unknown city, using default"
            );
            metrics::counter!("panchang_city_fallback_total").increment(1);
        }
        resolved
    }
}

/// Parses a strict `YYYY-MM-DD` civil date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, PanchangError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| PanchangError::InvalidDate {
        input: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::{Paksha, RahuWindow};
    use crate::domain::entities::{City, ClockTime};
    use crate::domain::ephemeris::{EphemerisError, MockEphemeris, RiseSetEvent};
    use chrono::Weekday;
    use mockall::predicate::*;

    const DAY: f64 = 2_460_871.5;

    fn directory() -> Arc<CityDirectory> {
        Arc::new(
            CityDirectory::new(
                vec![
                    City::new("delhi", 28.6139, 77.2090),
                    City::new("tromso", 69.6496, 18.9560),
                ],
                "delhi",
            )
            .unwrap(),
        )
    }

    /// Sun at 100 deg, Moon at 350 deg: tithi 21 (Shashthi, waning), Revati.
    fn mock_longitudes(mock: &mut MockEphemeris) {
        mock.expect_longitude()
            .with(always(), eq(Body::Sun))
            .returning(|_, _| Ok(100.0));
        mock.expect_longitude()
            .with(always(), eq(Body::Moon))
            .returning(|_, _| Ok(350.0));
    }

    /// Sunrise 06:00, sunset 18:00 local (offset 5.5h).
    fn mock_daylight(mock: &mut MockEphemeris) {
        mock.expect_rise_set()
            .with(always(), always(), always(), eq(RiseSetEvent::Rise), always())
            .returning(|day, _, _, _, _| Ok(day + 0.5 / 24.0));
        mock.expect_rise_set()
            .with(always(), always(), always(), eq(RiseSetEvent::Set), always())
            .returning(|day, _, _, _, _| Ok(day + 12.5 / 24.0));
    }

    fn service(mock: MockEphemeris) -> PanchangService<MockEphemeris> {
        PanchangService::new(Arc::new(mock), directory(), 5.5)
    }

    fn request(city: Option<&str>, date: &str) -> PanchangRequest {
        PanchangRequest {
            city: city.map(str::to_string),
            date: Some(date.to_string()),
            coordinate: None,
        }
    }

    #[test]
    fn test_compute_full_record() {
        let mut mock = MockEphemeris::new();
        mock.expect_day_number().return_const(DAY);
        mock_longitudes(&mut mock);
        mock_daylight(&mut mock);

        let record = service(mock)
            .compute(&request(Some("Delhi"), "2025-07-15"))
            .unwrap();

        assert_eq!(record.city, "Delhi");
        assert_eq!(record.weekday, Weekday::Tue);
        assert_eq!(record.weekday_name(), "Tuesday");
        assert_eq!(record.sunrise.to_string(), "06:00 AM");
        assert_eq!(record.sunset.to_string(), "06:00 PM");
        assert_eq!(record.tithi.number(), 21);
        assert_eq!(record.tithi.name(), "Shashthi");
        assert_eq!(record.paksha(), Paksha::Waning);
        assert_eq!(record.nakshatra, Nakshatra::Revati);
        // Tuesday: first eighth of daylight
        assert_eq!(record.rahu_kaal.to_string(), "06:00 AM \u{2013} 07:30 AM");
    }

    #[test]
    fn test_unknown_city_falls_back_to_default() {
        let mut mock = MockEphemeris::new();
        mock.expect_day_number().return_const(DAY);
        mock_longitudes(&mut mock);
        mock_daylight(&mut mock);

        let record = service(mock)
            .compute(&request(Some("Atlantis"), "2025-07-15"))
            .unwrap();

        assert_eq!(record.city, "Delhi");
        assert_eq!(record.coordinate.latitude, 28.6139);
    }

    #[test]
    fn test_omitted_city_uses_default() {
        let mut mock = MockEphemeris::new();
        mock.expect_day_number().return_const(DAY);
        mock_longitudes(&mut mock);
        mock_daylight(&mut mock);

        let record = service(mock)
            .compute(&request(None, "2025-07-15"))
            .unwrap();

        assert_eq!(record.city, "Delhi");
    }

    #[test]
    fn test_malformed_date_is_rejected_before_any_query() {
        let mock = MockEphemeris::new();

        let err = service(mock)
            .compute(&request(Some("delhi"), "2025-13-40"))
            .unwrap_err();

        assert!(matches!(err, PanchangError::InvalidDate { ref input, .. } if input == "2025-13-40"));
    }

    #[test]
    fn test_polar_location_keeps_lunar_categories() {
        let mut mock = MockEphemeris::new();
        mock.expect_day_number().return_const(DAY);
        mock_longitudes(&mut mock);
        mock.expect_rise_set()
            .returning(|_, _, _, _, _| Err(EphemerisError::NeverRises { body: Body::Sun }));

        let record = service(mock)
            .compute(&request(Some("tromso"), "2025-12-21"))
            .unwrap();

        assert_eq!(record.sunrise, ClockTime::Unavailable);
        assert_eq!(record.sunset, ClockTime::Unavailable);
        assert_eq!(record.rahu_kaal, RahuWindow::Unavailable);
        assert_eq!(
            record.rahu_kaal.to_string(),
            "Unavailable \u{2013} Unavailable"
        );
        assert_eq!(record.tithi.name(), "Shashthi");
        assert_eq!(record.nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn test_longitude_failure_is_an_error() {
        let mut mock = MockEphemeris::new();
        mock.expect_day_number().return_const(DAY);
        mock_daylight(&mut mock);
        mock.expect_longitude()
            .returning(|_, _| Err(EphemerisError::Computation("data unreachable".into())));

        let err = service(mock)
            .compute(&request(Some("delhi"), "2025-07-15"))
            .unwrap_err();

        assert!(matches!(err, PanchangError::Ephemeris(_)));
    }

    #[test]
    fn test_explicit_coordinate_overrides_city() {
        let mut mock = MockEphemeris::new();
        mock.expect_day_number().return_const(DAY);
        mock_longitudes(&mut mock);
        mock_daylight(&mut mock);
        let service = service(mock);

        let coordinate = GeoCoordinate::new(19.0760, 72.8777).unwrap();
        let named = service
            .compute(&PanchangRequest {
                city: Some("navi mumbai".to_string()),
                date: Some("2025-07-15".to_string()),
                coordinate: Some(coordinate),
            })
            .unwrap();
        let unnamed = service
            .compute(&PanchangRequest {
                city: None,
                date: Some("2025-07-15".to_string()),
                coordinate: Some(coordinate),
            })
            .unwrap();

        assert_eq!(named.city, "Navi Mumbai");
        assert_eq!(named.coordinate, coordinate);
        assert_eq!(unnamed.city, CUSTOM_LOCATION);
    }

    #[test]
    fn test_omitted_date_uses_today() {
        let mut mock = MockEphemeris::new();
        mock.expect_day_number().return_const(DAY);
        mock_longitudes(&mut mock);
        mock_daylight(&mut mock);
        let service = service(mock);

        let record = service
            .compute(&PanchangRequest {
                city: Some("delhi".to_string()),
                ..Default::default()
            })
            .unwrap();

        let today = service.today();
        assert!((record.date - today).num_days().abs() <= 1);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-07-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
        );
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("15/07/2025").is_err());
        assert!(parse_date("").is_err());
    }
}
