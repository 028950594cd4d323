//! Rahu kaal: the weekday-dependent eighth of daylight.
//!
//! Daylight (sunrise to sunset) is split into 8 equal segments. A fixed
//! table picks one segment per weekday.

use chrono::Weekday;
use std::fmt;

use crate::domain::entities::ClockTime;

/// 1-based daylight segment per weekday, indexed Monday = 0 ... Sunday = 6.
///
/// Mon 7, Tue 1, Wed 6, Thu 4, Fri 5, Sat 3, Sun 2. This is the traditional
/// day-division table as used by the service; do not reorder.
pub const RAHU_KAAL_SEGMENTS: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];

/// Separator between start and end in the rendered window.
pub const WINDOW_SEPARATOR: &str = " \u{2013} ";

/// The rahu kaal interval, or the unavailable pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RahuWindow {
    Window { start: ClockTime, end: ClockTime },
    Unavailable,
}

impl RahuWindow {
    pub fn start(&self) -> ClockTime {
        match self {
            Self::Window { start, .. } => *start,
            Self::Unavailable => ClockTime::Unavailable,
        }
    }

    pub fn end(&self) -> ClockTime {
        match self {
            Self::Window { end, .. } => *end,
            Self::Unavailable => ClockTime::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Window { .. })
    }
}

impl fmt::Display for RahuWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start(), WINDOW_SEPARATOR, self.end())
    }
}

/// Segment number (1..=8) for a weekday.
pub fn segment_for(weekday: Weekday) -> u8 {
    RAHU_KAAL_SEGMENTS[weekday.num_days_from_monday() as usize]
}

/// Computes the rahu kaal window for `weekday` from local sunrise/sunset.
///
/// Returns [`RahuWindow::Unavailable`] if either time is unavailable. A
/// sunset earlier than sunrise is taken to fall after local midnight.
pub fn rahu_kaal(weekday: Weekday, sunrise: ClockTime, sunset: ClockTime) -> RahuWindow {
    let (Some(rise), Some(set)) = (sunrise.hours(), sunset.hours()) else {
        return RahuWindow::Unavailable;
    };

    let set = if set < rise { set + 24.0 } else { set };
    let segment = (set - rise) / 8.0;
    let ordinal = segment_for(weekday);

    let start = rise + segment * f64::from(ordinal - 1);
    let end = start + segment;

    RahuWindow::Window {
        start: ClockTime::from_hours(start),
        end: ClockTime::from_hours(end),
    }
}
