//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete astronomy and the location table the service starts with.
//!
//! # Modules
//!
//! - [`ephemeris`] - Series-based Sun/Moon ephemeris implementing [`crate::domain::ephemeris::Ephemeris`]
//! - [`cities`] - Built-in city table and JSON city file loader

pub mod cities;
pub mod ephemeris;
