use chrono::{DateTime, Utc};

use super::angles::{normalize_degrees, normalize_hours};
use super::julian::JulianDate;

/// Greenwich Mean Sidereal Time for a UTC instant, in hours `[0, 24)`.
///
/// IAU 1982 polynomial in Julian centuries since J2000.0 (Meeus, eq. 12.4),
/// evaluated directly at the instant rather than at 0h UT.
pub fn gmst(instant: &DateTime<Utc>) -> qtty::HourAngles {
    let jd = JulianDate::from_datetime(instant);
    let d = jd.days_since_j2000();
    let t = jd.centuries_since_j2000();

    let degrees = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;

    qtty::HourAngles::new(normalize_hours(normalize_degrees(degrees) / 15.0))
}

/// Local Mean Sidereal Time in hours `[0, 24)` for an observer at `longitude`
/// (degrees, positive east).
pub fn local_sidereal_time(longitude: qtty::Degrees, instant: &DateTime<Utc>) -> qtty::HourAngles {
    let offset_hours = longitude.value() / 15.0;
    qtty::HourAngles::new(normalize_hours(gmst(instant).value() + offset_hours))
}
