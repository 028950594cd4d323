//! Local time of day with an explicit "unavailable" state.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::utils::clock_format::{ClockParseError, format_clock_time, parse_clock_time};

/// Text used wherever a time could not be computed.
pub const UNAVAILABLE: &str = "Unavailable";

/// A local clock time, kept as fractional hours since local midnight.
///
/// Hours are always normalized into `[0, 24)` on construction, so a value
/// shifted past midnight by a timezone offset still formats correctly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockTime {
    At(f64),
    Unavailable,
}

impl ClockTime {
    /// Creates a clock time from hours, wrapping into `[0, 24)`.
    pub fn from_hours(hours: f64) -> Self {
        let mut wrapped = hours.rem_euclid(24.0);
        // rem_euclid can round up to exactly 24.0 for tiny negative inputs
        if wrapped >= 24.0 {
            wrapped = 0.0;
        }
        Self::At(wrapped)
    }

    pub fn hours(&self) -> Option<f64> {
        match self {
            Self::At(hours) => Some(*hours),
            Self::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::At(_))
    }

    /// The time as it is displayed: rounded to the nearest minute.
    pub fn at_minute_precision(&self) -> Self {
        match self {
            Self::At(hours) => Self::from_hours((hours * 60.0).round() / 60.0),
            Self::Unavailable => Self::Unavailable,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(hours) => f.write_str(&format_clock_time(*hours)),
            Self::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

impl FromStr for ClockTime {
    type Err = ClockParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(UNAVAILABLE) {
            return Ok(Self::Unavailable);
        }
        parse_clock_time(s).map(Self::from_hours)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
