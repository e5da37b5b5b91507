/// Reduce `value` modulo `period` into `[0, period)`.
///
/// Negative inputs wrap from the top of the range, so the result is never
/// negative.
///
/// # Example
/// ```
/// use iso_visibility::time::normalize_angle;
/// assert_eq!(normalize_angle(-30.0, 360.0), 330.0);
/// assert_eq!(normalize_angle(25.5, 24.0), 1.5);
/// ```
pub fn normalize_angle(value: f64, period: f64) -> f64 {
    let wrapped = value.rem_euclid(period);
    // rem_euclid rounds tiny negative inputs up to `period` itself
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    normalize_angle(degrees, 360.0)
}

/// Wrap a time-like angle in hours into `[0, 24)`.
#[inline]
pub fn normalize_hours(hours: f64) -> f64 {
    normalize_angle(hours, 24.0)
}
