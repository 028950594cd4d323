//! Ephemeris access interface.
//!
//! The panchang core never computes celestial positions itself. It consumes
//! this trait, which exposes exactly three capabilities: converting a civil
//! date into a continuous day number, querying a body's ecliptic longitude,
//! and searching for a rise or set crossing.
//!
//! # Day number convention
//!
//! Day numbers are Julian Days at **0h UT** of the civil date (midnight-based).
//! Every consumer in this crate uses the same convention.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::ephemeris::AnalyticEphemeris`] - Series-based Sun/Moon model
//! - Test mocks available with `cfg(test)`

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::domain::entities::GeoCoordinate;

/// Bodies the core queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sun => f.write_str("Sun"),
            Self::Moon => f.write_str("Moon"),
        }
    }
}

/// Horizon crossing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    Rise,
    Set,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Rise)
    }
}

/// Which point of the disc has to cross the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Horizon {
    /// Centre of the disc, corrected for refraction only (h0 = -34').
    #[default]
    DiscCenter,
    /// Upper limb: refraction plus solar semidiameter (h0 = -50').
    UpperLimb,
}

impl Horizon {
    /// Target altitude of the disc centre in degrees (negative: below horizon).
    pub fn target_altitude_deg(self) -> f64 {
        match self {
            Self::DiscCenter => -34.0 / 60.0,
            Self::UpperLimb => -50.0 / 60.0,
        }
    }
}

/// Errors reported by an ephemeris backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EphemerisError {
    /// The body stays below the horizon for the whole day (polar night).
    #[error("{body} never rises on this day at this location")]
    NeverRises { body: Body },

    /// The body stays above the horizon for the whole day (midnight sun).
    #[error("{body} never sets on this day at this location")]
    NeverSets { body: Body },

    /// The backend cannot answer this query.
    #[error("query not supported for {body}")]
    Unsupported { body: Body },

    /// Numerical or data failure inside the backend.
    #[error("ephemeris computation failed: {0}")]
    Computation(String),
}

/// Astronomy capability consumed by the panchang services.
///
/// Implementations must be safe to call concurrently; every query is keyed
/// only by its arguments.
#[cfg_attr(test, mockall::automock)]
pub trait Ephemeris: Send + Sync {
    /// Julian Day at 0h UT of `date`.
    fn day_number(&self, date: NaiveDate) -> f64;

    /// Apparent ecliptic longitude of `body` in degrees, normalized to [0, 360).
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError::Computation`] if the backend fails.
    fn longitude(&self, day_number: f64, body: Body) -> Result<f64, EphemerisError>;

    /// Julian Day (UT) of the rise or set of `body` for the civil date of
    /// `day_number`: the crossing of the daylight period whose transit falls
    /// on that date in local mean solar time.
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError::NeverRises`] / [`EphemerisError::NeverSets`]
    /// when no crossing exists, [`EphemerisError::Unsupported`] when the
    /// backend cannot search for this body.
    fn rise_set(
        &self,
        day_number: f64,
        body: Body,
        location: GeoCoordinate,
        event: RiseSetEvent,
        horizon: Horizon,
    ) -> Result<f64, EphemerisError>;
}
