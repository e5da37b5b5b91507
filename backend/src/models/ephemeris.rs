use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

/// Equatorial position on the celestial sphere.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CelestialPosition {
    /// Right ascension in hours `[0, 24)`
    pub right_ascension: qtty::HourAngles,
    /// Declination in degrees `[-90, 90]`
    pub declination: qtty::Degrees,
}

impl CelestialPosition {
    pub fn new(ra_hours: f64, dec_deg: f64) -> Self {
        Self {
            right_ascension: qtty::HourAngles::new(ra_hours),
            declination: qtty::Degrees::new(dec_deg),
        }
    }

    /// Describe the first out-of-range or non-finite coordinate, if any.
    pub fn check(&self) -> Result<(), String> {
        let ra = self.right_ascension.value();
        if !ra.is_finite() || !(0.0..24.0).contains(&ra) {
            return Err(format!("right ascension {} must be finite and within [0, 24) hours", ra));
        }
        let dec = self.declination.value();
        if !dec.is_finite() || !(-90.0..=90.0).contains(&dec) {
            return Err(format!("declination {} must be finite and within [-90, 90] degrees", dec));
        }
        Ok(())
    }
}

/// One time-stamped position of a tracked object, as supplied by the
/// ephemeris provider.
///
/// Field aliases accept the provider's short names (`datetime`, `ra`, `dec`,
/// `delta`, `mag`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EphemerisSample {
    #[serde(alias = "datetime")]
    pub timestamp: DateTime<Utc>,
    /// Right ascension in hours
    #[serde(alias = "ra")]
    pub right_ascension: qtty::HourAngles,
    /// Declination in degrees
    #[serde(alias = "dec")]
    pub declination: qtty::Degrees,
    /// Geocentric distance in AU
    #[serde(default, alias = "delta", skip_serializing_if = "Option::is_none")]
    pub distance_au: Option<f64>,
    /// Apparent visual magnitude
    #[serde(default, alias = "mag", skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
}

impl EphemerisSample {
    pub fn new(timestamp: DateTime<Utc>, ra_hours: f64, dec_deg: f64) -> Self {
        Self {
            timestamp,
            right_ascension: qtty::HourAngles::new(ra_hours),
            declination: qtty::Degrees::new(dec_deg),
            distance_au: None,
            magnitude: None,
        }
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn with_distance(mut self, distance_au: f64) -> Self {
        self.distance_au = Some(distance_au);
        self
    }

    pub fn position(&self) -> CelestialPosition {
        CelestialPosition {
            right_ascension: self.right_ascension,
            declination: self.declination,
        }
    }

    /// Describe the first malformed field, if any.
    pub fn check(&self) -> Result<(), String> {
        self.position().check()?;
        if let Some(magnitude) = self.magnitude {
            if !magnitude.is_finite() {
                return Err(format!("magnitude {} must be finite", magnitude));
            }
        }
        if let Some(distance) = self.distance_au {
            if !distance.is_finite() || distance < 0.0 {
                return Err(format!("distance {} AU must be finite and non-negative", distance));
            }
        }
        Ok(())
    }
}

/// Validate a whole sample sequence, failing on the first malformed sample.
///
/// Besides per-sample ranges this enforces strictly increasing timestamps.
pub fn validate_samples(samples: &[EphemerisSample]) -> KernelResult<()> {
    for (index, sample) in samples.iter().enumerate() {
        sample
            .check()
            .map_err(|reason| KernelError::malformed(index, reason))?;

        if index > 0 && sample.timestamp <= samples[index - 1].timestamp {
            return Err(KernelError::malformed(
                index,
                format!(
                    "timestamp {} does not follow the previous sample ({})",
                    sample.timestamp,
                    samples[index - 1].timestamp
                ),
            ));
        }
    }
    Ok(())
}
