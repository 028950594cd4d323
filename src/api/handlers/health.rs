//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::ephemeris::Body;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Ephemeris**: Sun and Moon longitudes for today
/// 2. **Cities**: Directory size and default city
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "ephemeris": { "status": "ok", "message": "Sun 112.85, Moon 320.41" },
///     "cities": { "status": "ok", "message": "12 cities, default: Delhi" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let ephemeris_check = check_ephemeris(&state);
    let cities_check = check_cities(&state);

    let all_healthy = ephemeris_check.is_ok() && cities_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            ephemeris: ephemeris_check,
            cities: cities_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Queries both longitudes for today's date.
fn check_ephemeris(state: &AppState) -> CheckStatus {
    let service = &state.panchang_service;
    let day = state.ephemeris.day_number(service.today());

    let sun = state.ephemeris.longitude(day, Body::Sun);
    let moon = state.ephemeris.longitude(day, Body::Moon);

    match (sun, moon) {
        (Ok(sun), Ok(moon)) => CheckStatus::ok(format!("Sun {sun:.2}, Moon {moon:.2}")),
        (Err(e), _) | (_, Err(e)) => CheckStatus::error(format!("Ephemeris error: {e}")),
    }
}

fn check_cities(state: &AppState) -> CheckStatus {
    let directory = state.panchang_service.cities();
    if directory.is_empty() {
        return CheckStatus::error("City directory is empty");
    }

    CheckStatus::ok(format!(
        "{} cities, default: {}",
        directory.len(),
        directory.default_city().name
    ))
}
