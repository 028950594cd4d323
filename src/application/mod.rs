//! Application layer services implementing the panchang pipeline.
//!
//! Services consume the domain [`Ephemeris`](crate::domain::ephemeris::Ephemeris)
//! trait and the injected city directory, and provide a clean API for HTTP
//! handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::solar_window_service::SolarWindowService`] - Local sunrise/sunset
//! - [`services::panchang_service::PanchangService`] - Composes the daily record

pub mod services;
