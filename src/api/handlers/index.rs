//! Root banner and fallback handlers.

use axum::{Json, http::Uri};
use serde_json::{Value, json};

use crate::error::AppError;

/// `GET /`: names the service and an example request.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "msg": "Panchang API is running! Example: /api/panchang?city=delhi&date=2025-07-15&lang=en",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Structured 404 for unknown routes.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
