//! HTTP server initialization and runtime setup.
//!
//! Builds the city directory and ephemeris, wires the services and runs the
//! Axum server until a shutdown signal arrives.

use crate::api::middleware::cors;
use crate::config::Config;
use crate::domain::entities::CityDirectory;
use crate::domain::ephemeris::Ephemeris;
use crate::infrastructure::cities::{builtin_cities, load_city_file};
use crate::infrastructure::ephemeris::AnalyticEphemeris;
use crate::routes::{RouterOptions, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the city directory from `CITIES_FILE` or the built-in table.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the table is invalid
/// (including a default city missing from it).
pub fn build_city_directory(config: &Config) -> Result<CityDirectory> {
    let cities = match config.cities_file {
        Some(ref path) => load_city_file(path)?,
        None => builtin_cities(),
    };

    CityDirectory::new(cities, &config.default_city).context("Failed to build city directory")
}

/// Builds the shared state from configuration.
///
/// # Errors
///
/// See [`build_city_directory`].
pub fn build_state(config: &Config) -> Result<AppState> {
    let cities = build_city_directory(config)?;
    tracing::info!(count = cities.len(), default = %cities.default_city().name, "City directory ready");

    let ephemeris: Arc<dyn Ephemeris> = Arc::new(AnalyticEphemeris::new(config.zodiac()));

    Ok(AppState::new(
        ephemeris,
        Arc::new(cities),
        config.tz_offset_hours,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The city directory cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let options = RouterOptions {
        behind_proxy: config.behind_proxy,
        rate_limit: true,
        cors_origins: cors::parse_origins(&config.cors_allow_origins)?,
    };
    let app = app_router(state, options);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
