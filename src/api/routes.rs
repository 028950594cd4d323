//! API route configuration.

use crate::api::handlers::{cities_handler, panchang_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public read-only API routes.
///
/// # Endpoints
///
/// - `GET /panchang` - Daily panchang for a city or coordinates
/// - `GET /cities`   - Cities resolvable by name
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/panchang", get(panchang_handler))
        .route("/cities", get(cities_handler))
}
