//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Banner with an example request
//! - `GET  /health`  - Health check: ephemeris, city directory
//! - `/api/*`        - Panchang REST API (rate limited)
//! - anything else   - Structured 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Browser widget access
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, index_handler, not_found_handler};
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Transport options for [`app_router`].
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Key rate limiting on `X-Forwarded-For` / `X-Real-IP` instead of the
    /// peer socket address. Enable only behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Apply per-IP rate limiting to `/api/*`. Requires a connection that
    /// carries the peer address.
    pub rate_limit: bool,
    /// Allowed CORS origins; empty allows any origin.
    pub cors_origins: Vec<HeaderValue>,
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, options: RouterOptions) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, options))
}

/// Routes and middleware without trailing-slash normalization.
pub fn router(state: AppState, options: RouterOptions) -> Router {
    let api_router = match (options.rate_limit, options.behind_proxy) {
        (false, _) => api::routes::public_routes(),
        (true, false) => api::routes::public_routes().layer(rate_limit::layer()),
        (true, true) => api::routes::public_routes().layer(rate_limit::proxied_layer()),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors::layer(options.cors_origins))
        .layer(tracing::layer())
}
