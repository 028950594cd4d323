//! Command-line panchang tool.
//!
//! Computes the same record as the HTTP service without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Today's panchang for the default city
//! cargo run --bin panchang -- show
//!
//! # A given city and date
//! cargo run --bin panchang -- show --city varanasi --date 2025-07-15
//!
//! # Explicit coordinates, tropical zodiac, JSON output
//! cargo run --bin panchang -- show --lat 69.65 --lon 18.96 --zodiac tropical --json
//!
//! # Known cities
//! cargo run --bin panchang -- cities
//! ```
//!
//! # Environment Variables
//!
//! `DEFAULT_CITY`, `TZ_OFFSET_HOURS`, `CITIES_FILE` and `ZODIAC` are read the
//! same way as by the server; command-line flags take precedence.

use panchang_api::api::dto::panchang::{PanchangQuery, PanchangResponse};
use panchang_api::application::services::PanchangService;
use panchang_api::config::Config;
use panchang_api::domain::entities::PanchangRecord;
use panchang_api::domain::ephemeris::Ephemeris;
use panchang_api::infrastructure::ephemeris::{AnalyticEphemeris, Zodiac};
use panchang_api::server::build_city_directory;
use panchang_api::utils::title_case::title_case;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// Daily panchang from the command line.
#[derive(Parser)]
#[command(name = "panchang")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the panchang for a city or coordinates
    Show {
        /// City name (case-insensitive); unknown names use the default city
        #[arg(short, long)]
        city: Option<String>,

        /// Date as YYYY-MM-DD (default: today at the configured offset)
        #[arg(short, long)]
        date: Option<String>,

        /// Latitude in degrees, north positive
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude in degrees, east positive
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Zodiac: lahiri (default) or tropical
        #[arg(short, long)]
        zodiac: Option<Zodiac>,

        /// Fixed offset of local clock times from UTC, in hours
        #[arg(long, allow_hyphen_values = true)]
        tz_offset: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List cities resolvable by name
    Cities,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Show {
            city,
            date,
            lat,
            lon,
            zodiac,
            tz_offset,
            json,
        } => {
            if let Some(zodiac) = zodiac {
                config.zodiac = zodiac.to_string();
            }
            if let Some(offset) = tz_offset {
                config.tz_offset_hours = offset;
            }
            config.validate().context("Invalid configuration")?;

            let query = PanchangQuery {
                city,
                date,
                lang: None,
                lat,
                lon,
            };
            show(&config, query, json)?;
        }
        Commands::Cities => {
            config.validate().context("Invalid configuration")?;
            list_cities(&config)?;
        }
    }

    Ok(())
}

/// Computes and prints one record.
fn show(config: &Config, query: PanchangQuery, json: bool) -> Result<()> {
    let cities = Arc::new(build_city_directory(config)?);
    let ephemeris: Arc<dyn Ephemeris> = Arc::new(AnalyticEphemeris::new(config.zodiac()));
    let service = PanchangService::new(ephemeris, cities, config.tz_offset_hours);

    let request = query.into_request()?;
    let record = service.compute(&request)?;

    if json {
        let body = serde_json::to_string_pretty(&PanchangResponse::from(&record))?;
        println!("{body}");
    } else {
        print_record(&record, config);
    }

    Ok(())
}

/// Prints a record as an aligned, colored block.
///
/// # Output Format
///
/// ```text
/// Panchang for Delhi
///
///   Date       2025-07-15 (Tuesday)
///   Tithi      Krishna Panchami (waning)
///   Nakshatra  Shatabhisha
///   Sunrise    05:35 AM
///   Sunset     07:19 PM
///   Rahu kaal  05:35 AM – 07:18 AM
///
///   28.6139, 77.2090 · UTC+5.5 · lahiri
/// ```
fn print_record(record: &PanchangRecord, config: &Config) {
    println!(
        "{} {}",
        "Panchang for".bright_blue().bold(),
        record.city.bright_white().bold()
    );
    println!();

    let row = |label: &str, value: ColoredString| {
        println!("  {:<10} {}", label.bright_black(), value);
    };

    row(
        "Date",
        format!("{} ({})", record.date.format("%Y-%m-%d"), record.weekday_name()).normal(),
    );
    row(
        "Tithi",
        format!("{} ({})", record.tithi, record.paksha()).cyan(),
    );
    row("Nakshatra", record.nakshatra.name().cyan());
    row("Sunrise", colored_time(record.sunrise.is_available(), record.sunrise.to_string()));
    row("Sunset", colored_time(record.sunset.is_available(), record.sunset.to_string()));
    row(
        "Rahu kaal",
        colored_time(record.rahu_kaal.is_available(), record.rahu_kaal.to_string()),
    );

    println!();
    println!(
        "  {}",
        format!(
            "{:.4}, {:.4} · UTC{:+} · {}",
            record.coordinate.latitude,
            record.coordinate.longitude,
            config.tz_offset_hours,
            config.zodiac()
        )
        .bright_black()
    );
}

fn colored_time(available: bool, text: String) -> ColoredString {
    if available {
        text.yellow()
    } else {
        text.red()
    }
}

/// Lists the directory in alphabetical order.
///
/// # Output Format
///
/// ```text
/// Cities (default: Delhi)
///
///   Name               Latitude   Longitude
///   ─────────────────────────────────────────
///   Ahmedabad           23.0225     72.5714
///   Bengaluru           12.9716     77.5946
/// ```
fn list_cities(config: &Config) -> Result<()> {
    let directory = build_city_directory(config)?;

    println!(
        "{} {}",
        "Cities".bright_blue().bold(),
        format!("(default: {})", directory.default_city().name).bright_black()
    );
    println!();
    println!(
        "  {:<18} {:>9} {:>11}",
        "Name".bright_white().bold(),
        "Latitude".bright_white().bold(),
        "Longitude".bright_white().bold()
    );
    println!("  {}", "─".repeat(41).bright_black());

    for (key, coordinate) in directory.iter() {
        println!(
            "  {:<18} {:>9.4} {:>11.4}",
            title_case(key).cyan(),
            coordinate.latitude,
            coordinate.longitude
        );
    }

    println!();
    println!(
        "  Total: {}",
        directory.len().to_string().bright_white().bold()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_arguments() {
        let cli = Cli::try_parse_from([
            "panchang", "show", "--lat", "-33.87", "--lon", "151.21", "--zodiac", "lahiri",
            "--tz-offset", "10",
        ])
        .unwrap();

        match cli.command {
            Commands::Show {
                lat,
                lon,
                zodiac,
                tz_offset,
                ..
            } => {
                assert_eq!(lat, Some(-33.87));
                assert_eq!(lon, Some(151.21));
                assert_eq!(zodiac, Some(Zodiac::Lahiri));
                assert_eq!(tz_offset, Some(10.0));
            }
            Commands::Cities => panic!("expected show"),
        }
    }

    #[test]
    fn test_lat_requires_lon() {
        assert!(Cli::try_parse_from(["panchang", "show", "--lat", "10"]).is_err());
    }
}
