//! Domain layer containing the calendar model and its rules.
//!
//! This module implements the astronomical-to-calendrical conversion rules
//! independent of transport and of any particular ephemeris backend.
//!
//! # Architecture
//!
//! - [`entities`] - Value objects (coordinates, cities, clock times, results)
//! - [`calendar`] - Pure rules mapping longitudes and daylight to categories
//! - [`ephemeris`] - The narrow astronomy interface consumed by the services
//! - [`errors`] - Domain error taxonomy
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The [`ephemeris::Ephemeris`] trait is implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])
//!
//! # Computation Flow
//!
//! 1. A civil date is converted into a day number by the ephemeris
//! 2. Sun/Moon longitudes feed [`calendar::tithi`] and [`calendar::nakshatra`]
//! 3. Rise/set instants become a [`entities::SolarWindow`] in local hours
//! 4. The weekday and the window feed [`calendar::rahu_kaal`]

pub mod calendar;
pub mod entities;
pub mod ephemeris;
pub mod errors;
