//! Handler for the city list endpoint.

use axum::{Json, extract::State};

use crate::api::dto::cities::{CitiesResponse, CityItem};
use crate::state::AppState;
use crate::utils::title_case::title_case;

/// Lists the cities the service resolves by name.
///
/// # Endpoint
///
/// `GET /api/cities`
pub async fn cities_handler(State(state): State<AppState>) -> Json<CitiesResponse> {
    let directory = state.panchang_service.cities();

    let items: Vec<CityItem> = directory
        .iter()
        .map(|(key, coordinate)| CityItem {
            key: key.to_string(),
            name: title_case(key),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        })
        .collect();

    Json(CitiesResponse {
        default_city: directory.default_city().name,
        total: items.len(),
        items,
    })
}
