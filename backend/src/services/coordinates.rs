//! Equatorial to horizontal coordinate transform and horizon helpers.

use chrono::{DateTime, Utc};

use crate::error::KernelResult;
use crate::models::{CelestialPosition, HorizontalPosition, ObserverLocation};
use crate::time::{local_sidereal_time, normalize_degrees};

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Convert a celestial position to altitude/azimuth for an observer at `instant`.
///
/// The observer is validated first; the position is assumed to be in range
/// (see [`CelestialPosition::check`]).
///
/// Azimuth is measured from north through east and resolved with `atan2`, so
/// every hour angle lands in the correct quadrant.
pub fn ra_dec_to_alt_az(
    position: &CelestialPosition,
    observer: &ObserverLocation,
    instant: &DateTime<Utc>,
) -> KernelResult<HorizontalPosition> {
    observer.validate()?;
    Ok(horizontal_unchecked(position, observer, instant))
}

/// Transform without re-validating the observer, for callers that already did.
pub(crate) fn horizontal_unchecked(
    position: &CelestialPosition,
    observer: &ObserverLocation,
    instant: &DateTime<Utc>,
) -> HorizontalPosition {
    let lst = local_sidereal_time(observer.longitude_deg(), instant);
    let hour_angle = qtty::Degrees::new((lst.value() - position.right_ascension.value()) * 15.0);

    let (sin_dec, cos_dec) = position.declination.sin_cos();
    let (sin_lat, cos_lat) = observer.latitude_deg().sin_cos();
    let (sin_ha, cos_ha) = hour_angle.sin_cos();

    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_ha).clamp(-1.0, 1.0);
    let altitude = qtty::Radians::new(sin_alt.asin()).to::<qtty::Degree>();

    let y = -cos_dec * sin_ha * cos_lat;
    let x = sin_dec - sin_alt * sin_lat;
    let azimuth = qtty::Radians::new(y.atan2(x)).to::<qtty::Degree>();

    HorizontalPosition {
        altitude,
        azimuth: qtty::Degrees::new(normalize_degrees(azimuth.value())),
    }
}

/// `true` when `altitude` reaches `min_altitude` (inclusive).
pub fn is_above_horizon(altitude: qtty::Degrees, min_altitude: qtty::Degrees) -> bool {
    altitude.value() >= min_altitude.value()
}

/// Great-circle distance between two positions (haversine).
pub fn angular_separation(a: &CelestialPosition, b: &CelestialPosition) -> qtty::Degrees {
    let ra1 = a.right_ascension.to::<qtty::Degree>();
    let ra2 = b.right_ascension.to::<qtty::Degree>();

    let half_d_dec = (b.declination - a.declination) * 0.5;
    let half_d_ra = (ra2 - ra1) * 0.5;

    let h = half_d_dec.sin().powi(2)
        + a.declination.cos() * b.declination.cos() * half_d_ra.sin().powi(2);
    let central = 2.0 * h.sqrt().min(1.0).asin();

    qtty::Radians::new(central).to::<qtty::Degree>()
}

/// 16-point compass label for an azimuth in degrees.
pub fn compass_point(azimuth: qtty::Degrees) -> &'static str {
    let sector = (normalize_degrees(azimuth.value()) / 22.5).round() as usize % 16;
    COMPASS_POINTS[sector]
}

/// Render a horizontal position for display, e.g. `Alt: 45° 30', Az: 180° (S)`.
pub fn format_horizontal(position: &HorizontalPosition) -> String {
    let alt = position.altitude.value();
    let alt_deg = alt.floor();
    let alt_min = ((alt - alt_deg) * 60.0).floor();
    let az_deg = position.azimuth.value().floor();

    format!(
        "Alt: {}° {}', Az: {}° ({})",
        alt_deg as i64,
        alt_min as i64,
        az_deg as i64,
        compass_point(position.azimuth)
    )
}
