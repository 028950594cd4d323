//! Local sunrise/sunset service.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::entities::{GeoCoordinate, SolarWindow};
use crate::domain::ephemeris::{Body, Ephemeris, EphemerisError, Horizon, RiseSetEvent};

/// Computes sunrise and sunset as local clock hours.
///
/// The timezone offset is fixed at construction and never derived from the
/// coordinates. A failed rise or set search yields
/// [`SolarWindow::Unavailable`] for both times.
pub struct SolarWindowService<E: Ephemeris + ?Sized> {
    ephemeris: Arc<E>,
    tz_offset_hours: f64,
}

impl<E: Ephemeris + ?Sized> SolarWindowService<E> {
    pub fn new(ephemeris: Arc<E>, tz_offset_hours: f64) -> Self {
        Self {
            ephemeris,
            tz_offset_hours,
        }
    }

    pub fn tz_offset_hours(&self) -> f64 {
        self.tz_offset_hours
    }

    /// Sunrise and sunset at `location` on `date`, in local time.
    pub fn window(&self, location: GeoCoordinate, date: NaiveDate) -> SolarWindow {
        match self.local_hours(location, date) {
            Ok((sunrise, sunset)) => SolarWindow::from_local_hours(sunrise, sunset),
            Err(e) => {
                warn!(
                    %date,
                    latitude = location.latitude,
                    longitude = location.longitude,
                    error = %e,
                    "Sunrise/sunset unavailable"
                );
                metrics::counter!("panchang_solar_window_unavailable_total").increment(1);
                SolarWindow::Unavailable
            }
        }
    }

    fn local_hours(
        &self,
        location: GeoCoordinate,
        date: NaiveDate,
    ) -> Result<(f64, f64), EphemerisError> {
        let day_number = self.ephemeris.day_number(date);

        let crossing = |event| {
            self.ephemeris
                .rise_set(day_number, Body::Sun, location, event, Horizon::DiscCenter)
                .map(|jd| (jd - day_number) * 24.0 + self.tz_offset_hours)
        };

        let sunrise = crossing(RiseSetEvent::Rise)?;
        let sunset = crossing(RiseSetEvent::Set)?;

        Ok((sunrise, sunset))
    }
}
