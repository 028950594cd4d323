//! Business logic services for the application layer.

pub mod panchang_service;
pub mod solar_window_service;

pub use panchang_service::{PanchangRequest, PanchangService};
pub use solar_window_service::SolarWindowService;
