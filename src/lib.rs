//! # Panchang API
//!
//! Daily Hindu calendar service built with Axum: tithi and paksha, nakshatra,
//! sunrise/sunset and the rahu kaal window for a date and location.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Calendar rules, value types and the ephemeris trait
//! - **Application Layer** ([`application`]) - Solar window and panchang composition services
//! - **Infrastructure Layer** ([`infrastructure`]) - Analytic ephemeris and city tables
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DEFAULT_CITY="delhi"   # Optional
//! export ZODIAC="lahiri"        # Optional
//!
//! cargo run
//! curl "http://localhost:3000/api/panchang?city=delhi&date=2025-07-15"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PanchangRequest, PanchangService, SolarWindowService};
    pub use crate::domain::calendar::{Nakshatra, Paksha, RahuWindow, Tithi};
    pub use crate::domain::entities::{
        City, CityDirectory, ClockTime, GeoCoordinate, PanchangRecord, SolarWindow,
    };
    pub use crate::domain::ephemeris::{Body, Ephemeris, EphemerisError, Horizon, RiseSetEvent};
    pub use crate::domain::errors::PanchangError;
    pub use crate::error::AppError;
    pub use crate::infrastructure::ephemeris::{AnalyticEphemeris, Zodiac};
    pub use crate::state::AppState;
}
