//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::PanchangService;
use crate::domain::entities::CityDirectory;
use crate::domain::ephemeris::Ephemeris;

/// State shared by all request handlers.
///
/// Everything inside is read-only after startup; cloning only bumps
/// reference counts.
#[derive(Clone)]
pub struct AppState {
    pub ephemeris: Arc<dyn Ephemeris>,
    pub panchang_service: Arc<PanchangService<dyn Ephemeris>>,
}

impl AppState {
    /// Builds the services around an ephemeris backend and a city directory.
    pub fn new(
        ephemeris: Arc<dyn Ephemeris>,
        cities: Arc<CityDirectory>,
        tz_offset_hours: f64,
    ) -> Self {
        let panchang_service = Arc::new(PanchangService::new(
            Arc::clone(&ephemeris),
            cities,
            tz_offset_hours,
        ));

        Self {
            ephemeris,
            panchang_service,
        }
    }
}
