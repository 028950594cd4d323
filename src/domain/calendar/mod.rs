//! Calendar rules: pure functions from longitudes and daylight to categories.
//!
//! - [`tithi`] - Lunar day from the Moon-Sun elongation (12 deg partitions)
//! - [`nakshatra`] - Lunar mansion from the Moon's longitude (27 partitions)
//! - [`rahu_kaal`] - Weekday-indexed eighth of daylight

pub mod nakshatra;
pub mod rahu_kaal;
pub mod tithi;

pub use nakshatra::{NAKSHATRA_SPAN_DEG, Nakshatra};
pub use rahu_kaal::{RAHU_KAAL_SEGMENTS, RahuWindow, rahu_kaal};
pub use tithi::{Paksha, TITHI_NAMES, TITHI_SEGMENT_DEG, Tithi, tithi_name};
