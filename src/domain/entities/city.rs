//! City directory with lenient, case-insensitive lookup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::entities::GeoCoordinate;
use crate::domain::errors::PanchangError;
use crate::utils::title_case::title_case;

/// A named location as stored in the directory or a city file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(flatten)]
    pub coordinate: GeoCoordinate,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            coordinate: GeoCoordinate {
                latitude,
                longitude,
            },
        }
    }
}

/// Outcome of a directory lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCity {
    /// Title-cased name of the city whose coordinates are used.
    pub name: String,
    pub coordinate: GeoCoordinate,
    /// True when the query did not match and the default city was used.
    pub fallback: bool,
}

/// Immutable city table injected into the panchang service.
///
/// Keys are trimmed and lower-cased. Unknown or empty queries resolve to the
/// default city instead of failing.
#[derive(Debug, Clone)]
pub struct CityDirectory {
    cities: BTreeMap<String, GeoCoordinate>,
    default_key: String,
}

impl CityDirectory {
    /// Builds a directory from `cities` with `default_city` as the fallback.
    ///
    /// # Errors
    ///
    /// Returns [`PanchangError::InvalidCityTable`] if the table is empty, an
    /// entry has a blank name or out-of-range coordinates, or the default
    /// city is not part of the table.
    pub fn new(
        cities: impl IntoIterator<Item = City>,
        default_city: &str,
    ) -> Result<Self, PanchangError> {
        let mut table = BTreeMap::new();

        for city in cities {
            let key = normalize_key(&city.name);
            if key.is_empty() {
                return Err(PanchangError::InvalidCityTable(
                    "city name must not be blank".to_string(),
                ));
            }

            let coordinate =
                GeoCoordinate::new(city.coordinate.latitude, city.coordinate.longitude)
                    .map_err(|e| PanchangError::InvalidCityTable(format!("{key}: {e}")))?;

            table.insert(key, coordinate);
        }

        if table.is_empty() {
            return Err(PanchangError::InvalidCityTable(
                "at least one city is required".to_string(),
            ));
        }

        let default_key = normalize_key(default_city);
        if !table.contains_key(&default_key) {
            return Err(PanchangError::InvalidCityTable(format!(
                "default city '{default_city}' is not in the table"
            )));
        }

        Ok(Self {
            cities: table,
            default_key,
        })
    }

    /// Resolves a city query, falling back to the default city.
    pub fn resolve(&self, query: Option<&str>) -> ResolvedCity {
        let key = query.map(normalize_key).unwrap_or_default();

        match self.cities.get_key_value(&key) {
            Some((name, coordinate)) => ResolvedCity {
                name: title_case(name),
                coordinate: *coordinate,
                fallback: false,
            },
            None => ResolvedCity {
                fallback: true,
                ..self.default_city()
            },
        }
    }

    /// The default city.
    pub fn default_city(&self) -> ResolvedCity {
        let coordinate = self.cities[&self.default_key];
        ResolvedCity {
            name: title_case(&self.default_key),
            coordinate,
            fallback: false,
        }
    }

    /// Exact lookup without fallback.
    pub fn get(&self, name: &str) -> Option<GeoCoordinate> {
        self.cities.get(&normalize_key(name)).copied()
    }

    /// Iterates cities in alphabetical key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, GeoCoordinate)> {
        self.cities.iter().map(|(name, coord)| (name.as_str(), *coord))
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}
