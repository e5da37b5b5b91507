use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

/// Geographic location of an observer (latitude, longitude, elevation).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ObserverLocation {
    /// Latitude in decimal degrees (-90 to 90), positive north
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180), positive east
    pub longitude: f64,
    /// Elevation in meters above sea level (optional)
    #[serde(default, alias = "elevation", skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<f64>,
}

impl ObserverLocation {
    pub fn new(latitude: f64, longitude: f64, elevation_m: Option<f64>) -> KernelResult<Self> {
        let location = Self {
            latitude,
            longitude,
            elevation_m,
        };
        location.validate()?;
        Ok(location)
    }

    /// Check the ranges of every field.
    ///
    /// Fields are public and the type is deserializable, so every kernel entry
    /// point re-validates before computing anything.
    pub fn validate(&self) -> KernelResult<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(KernelError::InvalidLocation(format!(
                "latitude {} must be between -90 and 90 degrees",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(KernelError::InvalidLocation(format!(
                "longitude {} must be between -180 and 180 degrees",
                self.longitude
            )));
        }
        if let Some(elevation) = self.elevation_m {
            if !elevation.is_finite() || elevation < 0.0 {
                return Err(KernelError::InvalidLocation(format!(
                    "elevation {} must be a non-negative number of meters",
                    elevation
                )));
            }
        }
        Ok(())
    }

    pub fn latitude_deg(&self) -> qtty::Degrees {
        qtty::Degrees::new(self.latitude)
    }

    pub fn longitude_deg(&self) -> qtty::Degrees {
        qtty::Degrees::new(self.longitude)
    }

    /// Elevation in meters, 0 when not supplied.
    ///
    /// Accepted and validated, but no computation uses it yet.
    pub fn elevation_m(&self) -> f64 {
        self.elevation_m.unwrap_or(0.0)
    }
}
