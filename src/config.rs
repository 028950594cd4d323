//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export DEFAULT_CITY="delhi"
//! export TZ_OFFSET_HOURS="5.5"
//! export ZODIAC="tropical"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Rate limit on forwarded client IP (default: `false`)
//! - `DEFAULT_CITY` - Fallback city for unknown names (default: `delhi`)
//! - `TZ_OFFSET_HOURS` - Fixed local offset for clock times (default: `5.5`)
//! - `CITIES_FILE` - JSON city table replacing the built-in one
//! - `ZODIAC` - `lahiri` or `tropical` (default: `lahiri`)
//! - `CORS_ALLOW_ORIGINS` - `*` or comma-separated origins (default: `*`)

use anyhow::{Context, Result};
use std::env;

use crate::api::middleware::cors;
use crate::infrastructure::cities::DEFAULT_CITY;
use crate::infrastructure::ephemeris::Zodiac;

/// Largest offset in use anywhere (UTC+14, Line Islands).
const MAX_TZ_OFFSET_HOURS: f64 = 14.0;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub default_city: String,
    /// Offset applied to every clock time; never derived from coordinates.
    pub tz_offset_hours: f64,
    pub cities_file: Option<String>,
    pub zodiac: String,
    pub cors_allow_origins: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            default_city: DEFAULT_CITY.to_string(),
            tz_offset_hours: 5.5,
            cities_file: None,
            zodiac: Zodiac::default().to_string(),
            cors_allow_origins: "*".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TZ_OFFSET_HOURS` is not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let default_city = env::var("DEFAULT_CITY").unwrap_or(defaults.default_city);

        let tz_offset_hours = match env::var("TZ_OFFSET_HOURS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("TZ_OFFSET_HOURS must be a number, got '{raw}'"))?,
            Err(_) => defaults.tz_offset_hours,
        };

        let cities_file = env::var("CITIES_FILE").ok().filter(|v| !v.trim().is_empty());
        let zodiac = env::var("ZODIAC").unwrap_or(defaults.zodiac);
        let cors_allow_origins =
            env::var("CORS_ALLOW_ORIGINS").unwrap_or(defaults.cors_allow_origins);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            default_city,
            tz_offset_hours,
            cities_file,
            zodiac,
            cors_allow_origins,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `tz_offset_hours` is outside [-14, 14]
    /// - `zodiac` is unknown
    /// - `default_city` is blank
    /// - an entry of `cors_allow_origins` is not a valid header value
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.tz_offset_hours.is_finite()
            || self.tz_offset_hours.abs() > MAX_TZ_OFFSET_HOURS
        {
            anyhow::bail!(
                "TZ_OFFSET_HOURS must be between -14 and 14, got {}",
                self.tz_offset_hours
            );
        }

        self.zodiac
            .parse::<Zodiac>()
            .map_err(|e| anyhow::anyhow!("ZODIAC: {e}"))?;

        if self.default_city.trim().is_empty() {
            anyhow::bail!("DEFAULT_CITY must not be empty");
        }

        cors::parse_origins(&self.cors_allow_origins).context("Invalid CORS_ALLOW_ORIGINS")?;

        Ok(())
    }

    /// The configured zodiac, Lahiri if the value does not parse.
    pub fn zodiac(&self) -> Zodiac {
        self.zodiac.parse().unwrap_or_default()
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Default city: {}", self.default_city);
        tracing::info!("  Timezone offset: {:+} h", self.tz_offset_hours);
        tracing::info!("  Zodiac: {}", self.zodiac());
        match self.cities_file {
            Some(ref path) => tracing::info!("  Cities: {}", path),
            None => tracing::info!("  Cities: built-in"),
        }
        tracing::info!("  CORS origins: {}", self.cors_allow_origins);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable does not parse or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
