//! Visibility settings loaded from TOML files and environment variables.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! a horizon at 0°, standard atmosphere and five forecast windows.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{KernelError, KernelResult};
use crate::services::atmosphere::AtmosphericConditions;

/// Settings threaded through the status evaluator and the forecast.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VisibilitySettings {
    #[serde(default)]
    pub horizon: HorizonSettings,
    #[serde(default)]
    pub atmosphere: AtmosphericConditions,
    #[serde(default)]
    pub forecast: ForecastSettings,
}

/// Horizon threshold settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HorizonSettings {
    /// Minimum apparent altitude for an object to count as visible
    #[serde(default = "default_min_altitude_deg")]
    pub min_altitude_deg: f64,
}

/// Forecast assembly settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastSettings {
    /// Maximum number of windows returned by a forecast
    #[serde(default = "default_window_count")]
    pub window_count: usize,
}

fn default_min_altitude_deg() -> f64 {
    0.0
}

fn default_window_count() -> usize {
    5
}

impl Default for HorizonSettings {
    fn default() -> Self {
        Self {
            min_altitude_deg: default_min_altitude_deg(),
        }
    }
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            window_count: default_window_count(),
        }
    }
}

impl HorizonSettings {
    pub fn min_altitude(&self) -> qtty::Degrees {
        qtty::Degrees::new(self.min_altitude_deg)
    }
}

impl VisibilitySettings {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    /// `KernelError::Configuration` if the file cannot be read, parsed or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> KernelResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            KernelError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> KernelResult<Self> {
        let settings: VisibilitySettings = toml::from_str(content).map_err(|e| {
            KernelError::Configuration(format!("Failed to parse config file: {}", e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default location.
    ///
    /// Searches for `visibility.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> KernelResult<Self> {
        Self::from_first_existing(&default_search_paths())?.ok_or_else(|| {
            KernelError::Configuration(
                "No visibility.toml found in standard locations".to_string(),
            )
        })
    }

    /// Load the first of `paths` that exists.
    ///
    /// `Ok(None)` when none exists. A file that exists but fails to parse or
    /// validate is an error, not a reason to keep searching.
    pub fn from_first_existing(paths: &[PathBuf]) -> KernelResult<Option<Self>> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Self::from_file(path).map(Some),
            None => Ok(None),
        }
    }

    /// Apply `ISO_*` environment overrides on top of these settings.
    ///
    /// Recognised variables: `ISO_MIN_ALTITUDE_DEG`, `ISO_TEMPERATURE_C`,
    /// `ISO_PRESSURE_MB`, `ISO_WINDOW_COUNT`. Unset variables leave the
    /// current value untouched; unparsable ones are an error.
    pub fn with_env_overrides(mut self) -> KernelResult<Self> {
        if let Some(v) = env_override("ISO_MIN_ALTITUDE_DEG")? {
            self.horizon.min_altitude_deg = v;
        }
        if let Some(v) = env_override("ISO_TEMPERATURE_C")? {
            self.atmosphere.temperature_c = v;
        }
        if let Some(v) = env_override("ISO_PRESSURE_MB")? {
            self.atmosphere.pressure_mb = v;
        }
        if let Some(v) = env_override("ISO_WINDOW_COUNT")? {
            self.forecast.window_count = v;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that every setting is physically meaningful.
    pub fn validate(&self) -> KernelResult<()> {
        let min_alt = self.horizon.min_altitude_deg;
        if !min_alt.is_finite() || !(-90.0..=90.0).contains(&min_alt) {
            return Err(KernelError::Configuration(format!(
                "horizon.min_altitude_deg must be within [-90, 90], got {}",
                min_alt
            )));
        }

        let temperature = self.atmosphere.temperature_c;
        if !temperature.is_finite() || temperature <= -273.0 {
            return Err(KernelError::Configuration(format!(
                "atmosphere.temperature_c must be above -273, got {}",
                temperature
            )));
        }

        let pressure = self.atmosphere.pressure_mb;
        if !pressure.is_finite() || pressure <= 0.0 {
            return Err(KernelError::Configuration(format!(
                "atmosphere.pressure_mb must be positive, got {}",
                pressure
            )));
        }

        Ok(())
    }
}

/// Locations searched for `visibility.toml`, in order.
pub fn default_search_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("visibility.toml"),
        PathBuf::from("backend/visibility.toml"),
        PathBuf::from("../visibility.toml"),
    ]
}

fn env_override<T: FromStr>(name: &str) -> KernelResult<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            KernelError::Configuration(format!("{} has an invalid value: {:?}", name, raw))
        }),
        Err(_) => Ok(None),
    }
}
