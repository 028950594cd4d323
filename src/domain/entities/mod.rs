//! Core domain entities representing the panchang data model.
//!
//! Entities are request-scoped value objects. Nothing here is mutated after
//! construction and nothing is shared between requests except the read-only
//! [`CityDirectory`].
//!
//! # Entity Types
//!
//! - [`GeoCoordinate`] - A validated latitude/longitude pair
//! - [`City`] / [`CityDirectory`] - Named locations with a default fallback
//! - [`ClockTime`] - Local time of day, or the unavailable sentinel
//! - [`SolarWindow`] - Sunrise/sunset in local hours, all-or-nothing
//! - [`PanchangRecord`] - The aggregate daily result

pub mod city;
pub mod clock;
pub mod geo;
pub mod panchang;
pub mod solar_window;

pub use city::{City, CityDirectory, ResolvedCity};
pub use clock::ClockTime;
pub use geo::GeoCoordinate;
pub use panchang::PanchangRecord;
pub use solar_window::SolarWindow;
