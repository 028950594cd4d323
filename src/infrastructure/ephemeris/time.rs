//! Julian Day helpers.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub(crate) const J2000_JD: f64 = 2_451_545.0;

pub(crate) const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// `num_days_from_ce` of 0001-01-01 maps to JD 1721425.5.
const CE_TO_JD_MIDNIGHT: f64 = 1_721_424.5;

/// Julian Day of 1970-01-01 00:00 UTC.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day at 0h UT of a proleptic Gregorian date.
///
/// ```
/// use chrono::NaiveDate;
/// use panchang_api::infrastructure::ephemeris::julian_day_at_midnight;
///
/// let jd = julian_day_at_midnight(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
/// assert_eq!(jd, 2_451_544.5);
/// ```
pub fn julian_day_at_midnight(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce()) + CE_TO_JD_MIDNIGHT
}

/// UT calendar date containing `jd`. `None` outside chrono's date range.
pub(crate) fn civil_date(jd: f64) -> Option<NaiveDate> {
    let days = (jd - CE_TO_JD_MIDNIGHT).floor();
    if !days.is_finite() || days.abs() > f64::from(i32::MAX) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(days as i32)
}

/// Julian Day (UT) of an instant, to millisecond resolution.
pub(crate) fn julian_day_of<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian centuries since J2000.0.
pub(crate) fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
