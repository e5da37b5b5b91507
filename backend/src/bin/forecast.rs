//! ISO Visibility Forecast Binary
//!
//! Loads an ephemeris file, evaluates it for one observer and prints the
//! resulting forecast as JSON.
//!
//! # Usage
//!
//! ```bash
//! OBSERVER_LAT=51.4779 OBSERVER_LON=0.0015 \
//!   cargo run --bin iso-forecast -- ephemeris.json
//! ```
//!
//! # Environment Variables
//!
//! - `OBSERVER_LAT`: Observer latitude in degrees (required)
//! - `OBSERVER_LON`: Observer longitude in degrees, positive east (required)
//! - `OBSERVER_ELEVATION_M`: Observer elevation in meters (optional)
//! - `FORECAST_NOW`: Reference instant, RFC 3339 (default: current time)
//! - `VISIBILITY_CONFIG`: Path to a settings file (default: `visibility.toml` lookup)
//! - `ISO_*`: Setting overrides, see `VisibilitySettings::with_env_overrides`
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use iso_visibility::api::ForecastSummary;
use iso_visibility::config::default_search_paths;
use iso_visibility::models::ObserverLocation;
use iso_visibility::parsing::parse_ephemeris_json;
use iso_visibility::services::generate_forecast;
use iso_visibility::VisibilitySettings;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let ephemeris_path: PathBuf = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: iso-forecast <ephemeris.json>")?;

    let observer = observer_from_env()?;
    let settings = load_settings()?;
    let now = match env::var("FORECAST_NOW") {
        Ok(raw) => DateTime::parse_from_rfc3339(&raw)
            .with_context(|| format!("FORECAST_NOW is not RFC 3339: {}", raw))?
            .with_timezone(&Utc),
        Err(_) => Utc::now(),
    };

    let samples = parse_ephemeris_json(&ephemeris_path)?;
    info!(
        "Loaded {} samples from {}",
        samples.len(),
        ephemeris_path.display()
    );

    let forecast = generate_forecast(&samples, &observer, &now, &settings)
        .map_err(|e| anyhow::anyhow!("{} ({})", e.user_message(), e))?;

    let summary = ForecastSummary::from_forecast(&forecast);
    info!(
        "Status at {}: {} | next rise: {} | next set: {} | {} windows",
        now,
        summary.quality_label,
        format_event(summary.next_rise),
        format_event(summary.next_set),
        summary.window_count
    );

    println!("{}", serde_json::to_string_pretty(&forecast)?);
    Ok(())
}

fn observer_from_env() -> anyhow::Result<ObserverLocation> {
    let latitude: f64 = env::var("OBSERVER_LAT")
        .context("OBSERVER_LAT environment variable not set")?
        .parse()
        .context("OBSERVER_LAT must be a number")?;
    let longitude: f64 = env::var("OBSERVER_LON")
        .context("OBSERVER_LON environment variable not set")?
        .parse()
        .context("OBSERVER_LON must be a number")?;
    let elevation_m = match env::var("OBSERVER_ELEVATION_M") {
        Ok(raw) => Some(
            raw.parse::<f64>()
                .context("OBSERVER_ELEVATION_M must be a number")?,
        ),
        Err(_) => None,
    };

    Ok(ObserverLocation::new(latitude, longitude, elevation_m)?)
}

fn load_settings() -> anyhow::Result<VisibilitySettings> {
    let settings = match env::var("VISIBILITY_CONFIG") {
        Ok(path) => VisibilitySettings::from_file(&path)?,
        Err(_) => match VisibilitySettings::from_first_existing(&default_search_paths())? {
            Some(settings) => settings,
            None => {
                warn!("No visibility.toml found; using default settings");
                VisibilitySettings::default()
            }
        },
    };
    Ok(settings.with_env_overrides()?)
}

fn format_event(event: Option<DateTime<Utc>>) -> String {
    event
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "none in range".to_string())
}
