//! Reference frame for reported longitudes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::time::centuries_since_j2000;

/// Lahiri (Chitrapaksha) ayanamsha at J2000.0, degrees.
const LAHIRI_AT_J2000_DEG: f64 = 23.853;

/// General precession in longitude, degrees per Julian century.
const PRECESSION_DEG_PER_CENTURY: f64 = 1.397_2;

/// Zodiac in which body longitudes are measured. Lahiri by default, which
/// keeps the 27 nakshatra sectors fixed against the stars.
///
/// Tithi only depends on the Sun-Moon difference and is identical in both
/// frames; nakshatra shifts by the ayanamsha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zodiac {
    Tropical,
    #[default]
    Lahiri,
}

impl Zodiac {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tropical => "tropical",
            Self::Lahiri => "lahiri",
        }
    }

    /// Offset subtracted from tropical longitudes at `jd`.
    pub fn ayanamsha_deg(self, jd: f64) -> f64 {
        match self {
            Self::Tropical => 0.0,
            Self::Lahiri => lahiri_ayanamsha_deg(jd),
        }
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zodiac {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tropical" => Ok(Self::Tropical),
            "lahiri" | "sidereal" => Ok(Self::Lahiri),
            other => Err(format!(
                "unknown zodiac '{other}', expected 'tropical' or 'lahiri'"
            )),
        }
    }
}

/// Linear Lahiri ayanamsha in degrees.
pub fn lahiri_ayanamsha_deg(jd: f64) -> f64 {
    LAHIRI_AT_J2000_DEG + PRECESSION_DEG_PER_CENTURY * centuries_since_j2000(jd)
}
