//! Aggregate daily panchang record.

use chrono::{NaiveDate, Weekday};

use crate::domain::calendar::{Nakshatra, Paksha, RahuWindow, Tithi};
use crate::domain::entities::{ClockTime, GeoCoordinate};

/// One day's panchang for one location.
///
/// Constructed once per request by
/// [`crate::application::services::PanchangService`] and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangRecord {
    /// Title-cased name of the location used.
    pub city: String,
    pub coordinate: GeoCoordinate,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
    pub tithi: Tithi,
    pub nakshatra: Nakshatra,
    pub rahu_kaal: RahuWindow,
}

impl PanchangRecord {
    /// Full English weekday name, e.g. `Tuesday`.
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    pub fn paksha(&self) -> Paksha {
        self.tithi.paksha()
    }
}

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Tue), "Tuesday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn test_weekday_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        assert_eq!(weekday_name(chrono::Datelike::weekday(&date)), "Tuesday");
    }
}
