//! Handler for the daily panchang endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::panchang::{PanchangQuery, PanchangResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Computes the panchang for a city (or coordinates) and date.
///
/// # Endpoint
///
/// `GET /api/panchang`
///
/// # Query Parameters
///
/// - `city` (optional): City name, case-insensitive. Unknown names use the default city
/// - `date` (optional): `YYYY-MM-DD`, defaults to today at the configured offset
/// - `lang` (optional): Accepted and ignored
/// - `lat`, `lon` (optional): Explicit location, both or neither
///
/// # Response
///
/// ```json
/// {
///   "city": "Delhi",
///   "date": "2025-07-15",
///   "weekday": "Tuesday",
///   "sunrise": "05:35 AM",
///   "sunset": "07:19 PM",
///   "tithi": "Panchami",
///   "paksha": "waning",
///   "nakshatra": "Shatabhisha",
///   "rahu_kaal": "05:35 AM – 07:18 AM"
/// }
/// ```
///
/// Sunrise, sunset and both rahu kaal bounds read `Unavailable` where the
/// sun does not rise or set on that day.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed query or date and 500 Internal
/// Server Error when the ephemeris fails.
pub async fn panchang_handler(
    State(state): State<AppState>,
    query: Result<Query<PanchangQuery>, QueryRejection>,
) -> Result<Json<PanchangResponse>, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let request = query.into_request()?;
    let record = state.panchang_service.compute(&request)?;

    Ok(Json(PanchangResponse::from(&record)))
}
