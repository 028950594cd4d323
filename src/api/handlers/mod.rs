//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod cities;
pub mod health;
pub mod index;
pub mod panchang;

pub use cities::cities_handler;
pub use health::health_handler;
pub use index::{index_handler, not_found_handler};
pub use panchang::panchang_handler;
