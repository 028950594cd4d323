//! DTOs for the city list endpoint.

use serde::Serialize;

/// Known cities and the fallback used for unknown names.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub default_city: String,
    pub total: usize,
    pub items: Vec<CityItem>,
}

/// One directory entry.
#[derive(Debug, Serialize)]
pub struct CityItem {
    pub key: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
