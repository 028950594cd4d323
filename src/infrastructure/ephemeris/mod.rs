//! Analytic ephemeris backend.
//!
//! Provides [`AnalyticEphemeris`], an implementation of the domain
//! [`Ephemeris`](crate::domain::ephemeris::Ephemeris) trait. Longitudes come
//! from truncated solar and lunar series; sunrise and sunset come from the
//! SPA routines of the `solar_positioning` crate. It needs no data files, is
//! stateless and can be shared freely between request handlers.
//!
//! Longitudes are good to a few hundredths of a degree, below the resolution
//! of the calendar partitions (12 deg tithis, 13 deg 20' nakshatras).
//! Universal Time stands in for Terrestrial Time in the series.

mod analytic;
mod moon;
mod riseset;
mod sun;
mod time;
mod zodiac;

pub use analytic::AnalyticEphemeris;
pub use time::julian_day_at_midnight;
pub use zodiac::{Zodiac, lahiri_ayanamsha_deg};
