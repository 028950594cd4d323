//! Conversion between fractional hours and `HH:MM AM/PM` strings.

use thiserror::Error;

/// Errors produced when parsing a clock string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockParseError {
    #[error("expected 'HH:MM AM' or 'HH:MM PM', got '{0}'")]
    Format(String),

    #[error("clock value out of range in '{0}'")]
    OutOfRange(String),
}

/// Formats hours since local midnight as a 12-hour clock string.
///
/// Minutes are rounded to the nearest integer and carried into the hour, so
/// `5.9999` becomes `06:00 AM`. Hour 0 and hour 24 both render as
/// `12:00 AM`; hour 12 renders as `12:00 PM`.
///
/// # Examples
///
/// ```
/// use panchang_api::utils::clock_format::format_clock_time;
///
/// assert_eq!(format_clock_time(5.5), "05:30 AM");
/// assert_eq!(format_clock_time(18.75), "06:45 PM");
/// assert_eq!(format_clock_time(24.0), "12:00 AM");
/// ```
pub fn format_clock_time(hours: f64) -> String {
    let total_minutes = ((hours * 60.0).round() as i64).rem_euclid(24 * 60);
    let hour = total_minutes / 60;
    let minute = total_minutes % 60;

    let (display_hour, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{display_hour:02}:{minute:02} {suffix}")
}

/// Parses a `HH:MM AM/PM` string back into fractional hours in `[0, 24)`.
///
/// # Errors
///
/// Returns [`ClockParseError::Format`] for malformed input and
/// [`ClockParseError::OutOfRange`] for hours outside 1-12 or minutes
/// outside 0-59.
pub fn parse_clock_time(input: &str) -> Result<f64, ClockParseError> {
    let format_err = || ClockParseError::Format(input.to_string());

    let (clock, suffix) = input.trim().split_once(' ').ok_or_else(format_err)?;
    let (hour, minute) = clock.split_once(':').ok_or_else(format_err)?;

    let hour: u32 = hour.parse().map_err(|_| format_err())?;
    let minute: u32 = minute.parse().map_err(|_| format_err())?;

    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(ClockParseError::OutOfRange(input.to_string()));
    }

    let hour24 = match suffix.trim().to_ascii_uppercase().as_str() {
        "AM" => hour % 12,
        "PM" => hour % 12 + 12,
        _ => return Err(format_err()),
    };

    Ok(f64::from(hour24) + f64::from(minute) / 60.0)
}
