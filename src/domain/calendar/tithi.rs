//! Tithi (lunar day) and paksha (fortnight) determination.
//!
//! A tithi spans 12 deg of Moon-Sun elongation, giving 30 per lunation.
//! Both halves of the lunation reuse the same 15 names, so tithi 1 and
//! tithi 16 are both Pratipada; the paksha tells them apart.

use serde::Serialize;
use std::fmt;

/// Elongation covered by one tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Tithi names in order; index 14 is the full/new moon slot.
pub const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima/Amavasya",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Paksha {
    /// Shukla paksha, tithis 1-15.
    Waxing,
    /// Krishna paksha, tithis 16-30.
    Waning,
}

impl Paksha {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Waxing => "waxing",
            Self::Waning => "waning",
        }
    }

    /// Sanskrit name of the fortnight.
    pub fn traditional_name(self) -> &'static str {
        match self {
            Self::Waxing => "Shukla",
            Self::Waning => "Krishna",
        }
    }
}

impl fmt::Display for Paksha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tithi number in `1..=30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tithi {
    number: u8,
}

impl Tithi {
    /// Returns `None` outside `1..=30`.
    pub fn from_number(number: u8) -> Option<Self> {
        (1..=30).contains(&number).then_some(Self { number })
    }

    /// Determines the tithi from apparent Sun and Moon longitudes in degrees.
    ///
    /// `tithi = floor(((moon - sun) mod 360) / 12) + 1`
    pub fn from_longitudes(sun_deg: f64, moon_deg: f64) -> Self {
        let elongation = (moon_deg - sun_deg).rem_euclid(360.0);
        let index = (elongation / TITHI_SEGMENT_DEG).floor() as u8;
        Self {
            number: (index + 1).min(30),
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn name(&self) -> &'static str {
        tithi_name(self.number)
    }

    pub fn paksha(&self) -> Paksha {
        if self.number <= 15 {
            Paksha::Waxing
        } else {
            Paksha::Waning
        }
    }
}

impl fmt::Display for Tithi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.paksha().traditional_name(), self.name())
    }
}

/// Name of tithi `number`; periodic with period 15.
pub fn tithi_name(number: u8) -> &'static str {
    TITHI_NAMES[usize::from(number.saturating_sub(1)) % TITHI_NAMES.len()]
}
