//! First-order atmospheric effects: refraction and air mass.

use serde::{Deserialize, Serialize};

/// Refraction below this geometric altitude is not modelled.
const REFRACTION_FLOOR_DEG: f64 = -1.0;

/// Pressure and temperature at which Bennett's formula is tabulated.
const REFERENCE_PRESSURE_MB: f64 = 1010.0;
const REFERENCE_TEMPERATURE_C: f64 = 10.0;

/// Local atmosphere used to scale the refraction correction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AtmosphericConditions {
    #[serde(default = "default_temperature_c")]
    pub temperature_c: f64,
    #[serde(default = "default_pressure_mb")]
    pub pressure_mb: f64,
}

fn default_temperature_c() -> f64 {
    REFERENCE_TEMPERATURE_C
}

fn default_pressure_mb() -> f64 {
    REFERENCE_PRESSURE_MB
}

impl Default for AtmosphericConditions {
    fn default() -> Self {
        Self {
            temperature_c: default_temperature_c(),
            pressure_mb: default_pressure_mb(),
        }
    }
}

impl AtmosphericConditions {
    pub fn new(temperature_c: f64, pressure_mb: f64) -> Self {
        Self {
            temperature_c,
            pressure_mb,
        }
    }

    /// Multiplier applied to the standard-atmosphere correction.
    fn scale(&self) -> f64 {
        (self.pressure_mb / REFERENCE_PRESSURE_MB) * (283.0 / (273.0 + self.temperature_c))
    }
}

/// Correct a geometric altitude for atmospheric refraction (Bennett, 1982).
///
/// Altitudes below -1° are returned unchanged. Otherwise the correction is
/// never negative and the result never exceeds 90°.
pub fn apply_refraction(
    altitude: qtty::Degrees,
    conditions: &AtmosphericConditions,
) -> qtty::Degrees {
    let alt = altitude.value();
    if alt.is_nan() || alt < REFRACTION_FLOOR_DEG {
        return altitude;
    }

    let h = qtty::Degrees::new(alt + 7.31 / (alt + 4.4));
    let correction = qtty::Arcminutes::new((1.0 / h.tan()) * conditions.scale());
    let correction_deg = correction.to::<qtty::Degree>().value().max(0.0);

    qtty::Degrees::new((alt + correction_deg).min(90.0))
}

/// Relative air mass for an apparent altitude (Pickering, 2002).
///
/// `None` below the horizon. Above 85° the plane-parallel `sec(z)` is used.
pub fn airmass(altitude: qtty::Degrees) -> Option<f64> {
    let h = altitude.value();
    if h.is_nan() || h < 0.0 {
        return None;
    }
    if h > 85.0 {
        let zenith = qtty::Degrees::new(90.0 - h.min(90.0));
        return Some(1.0 / zenith.cos());
    }

    let effective = qtty::Degrees::new(h + 244.0 / (165.0 + 47.0 * h.powf(1.1)));
    Some(1.0 / effective.sin())
}
