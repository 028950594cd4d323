//! Sunrise/sunset pair in local time.

use crate::domain::entities::ClockTime;

/// Local sunrise and sunset for one day.
///
/// Either both times are known or neither is: a partially computed window
/// cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarWindow {
    Daylight { sunrise: ClockTime, sunset: ClockTime },
    Unavailable,
}

impl SolarWindow {
    /// Builds a window from local fractional hours, wrapping each into `[0, 24)`.
    pub fn from_local_hours(sunrise: f64, sunset: f64) -> Self {
        Self::Daylight {
            sunrise: ClockTime::from_hours(sunrise),
            sunset: ClockTime::from_hours(sunset),
        }
    }

    pub fn sunrise(&self) -> ClockTime {
        match self {
            Self::Daylight { sunrise, .. } => *sunrise,
            Self::Unavailable => ClockTime::Unavailable,
        }
    }

    pub fn sunset(&self) -> ClockTime {
        match self {
            Self::Daylight { sunset, .. } => *sunset,
            Self::Unavailable => ClockTime::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Daylight { .. })
    }
}
