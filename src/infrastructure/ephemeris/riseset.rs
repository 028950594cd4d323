//! Sunrise and sunset through the NREL SPA routines of `solar_positioning`.
//!
//! The civil date is taken from the day number and evaluated in local mean
//! solar time (longitude / 15 hours east of UT), so the returned crossing
//! belongs to the daylight period whose transit falls on that date.

use chrono::{Datelike, FixedOffset, NaiveTime, TimeZone};
use solar_positioning::time::DeltaT;
use solar_positioning::{SunriseResult, spa};

use crate::domain::entities::GeoCoordinate;
use crate::domain::ephemeris::{Body, EphemerisError, Horizon, RiseSetEvent};

use super::time::{civil_date, julian_day_of};

/// Seconds of local mean time per degree of longitude.
const SECONDS_PER_DEGREE: f64 = 240.0;

fn computation(err: impl std::fmt::Display) -> EphemerisError {
    EphemerisError::Computation(err.to_string())
}

/// Julian Day (UT) of the Sun's crossing of `horizon` on the civil date
/// containing `day_number`.
pub(crate) fn sun_crossing(
    day_number: f64,
    location: GeoCoordinate,
    event: RiseSetEvent,
    horizon: Horizon,
) -> Result<f64, EphemerisError> {
    let date = civil_date(day_number)
        .ok_or_else(|| computation(format!("day number {day_number} is out of range")))?;

    let offset_secs = (location.longitude * SECONDS_PER_DEGREE).round() as i32;
    let local_mean_time = FixedOffset::east_opt(offset_secs).ok_or_else(|| {
        computation(format!(
            "no local offset for longitude {}",
            location.longitude
        ))
    })?;
    let local_midnight = local_mean_time
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .single()
        .ok_or_else(|| computation(format!("ambiguous local midnight on {date}")))?;

    let delta_t = DeltaT::estimate_from_date(date.year(), date.month()).map_err(computation)?;

    let result = spa::sunrise_sunset_for_horizon(
        local_midnight,
        location.latitude,
        location.longitude,
        delta_t,
        solar_positioning::Horizon::Custom(horizon.target_altitude_deg()),
    )
    .map_err(computation)?;

    let instant = match result {
        SunriseResult::RegularDay {
            sunrise, sunset, ..
        } => {
            if event.is_rising() {
                sunrise
            } else {
                sunset
            }
        }
        SunriseResult::AllDay { .. } => return Err(EphemerisError::NeverSets { body: Body::Sun }),
        SunriseResult::AllNight { .. } => {
            return Err(EphemerisError::NeverRises { body: Body::Sun });
        }
    };

    Ok(julian_day_of(&instant))
}
