//! City tables: the built-in Indian city list and a JSON file loader.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::entities::City;

/// Key of the city used when a request names none or an unknown one.
pub const DEFAULT_CITY: &str = "delhi";

const BUILTIN: [(&str, f64, f64); 12] = [
    ("delhi", 28.6139, 77.2090),
    ("mumbai", 19.0760, 72.8777),
    ("kolkata", 22.5726, 88.3639),
    ("chennai", 13.0827, 80.2707),
    ("bengaluru", 12.9716, 77.5946),
    ("hyderabad", 17.3850, 78.4867),
    ("pune", 18.5204, 73.8567),
    ("ahmedabad", 23.0225, 72.5714),
    ("jaipur", 26.9124, 75.7873),
    ("lucknow", 26.8467, 80.9462),
    ("varanasi", 25.3176, 82.9739),
    ("ujjain", 23.1765, 75.7885),
];

/// Built-in city table.
pub fn builtin_cities() -> Vec<City> {
    BUILTIN
        .iter()
        .map(|&(name, lat, lon)| City::new(name, lat, lon))
        .collect()
}

/// Loads a city table from a JSON array of `{"name", "latitude", "longitude"}`.
///
/// Coordinates are validated later, when the directory is built.
pub fn load_city_file(path: impl AsRef<Path>) -> Result<Vec<City>> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read city file {}", path.display()))?;
    let cities = parse_city_json(&raw)
        .with_context(|| format!("Failed to parse city file {}", path.display()))?;

    info!(path = %path.display(), count = cities.len(), "Loaded city file");
    Ok(cities)
}

fn parse_city_json(raw: &str) -> Result<Vec<City>> {
    let cities: Vec<City> = serde_json::from_str(raw)?;
    Ok(cities)
}
