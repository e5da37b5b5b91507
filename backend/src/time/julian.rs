use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 TT, treated as UTC here).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Offset between Julian and Modified Julian Dates.
const MJD_OFFSET: f64 = 2_400_000.5;

const DAYS_PER_CENTURY: f64 = 36_525.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date representation.
/// JD 0 = 4713-01-01 12:00:00 BC (proleptic Julian calendar)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDate(qtty::Days);

impl JulianDate {
    /// The J2000.0 reference epoch.
    pub const J2000: JulianDate = JulianDate(qtty::Days::new(J2000_JD));

    /// Create a new JD value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Modified Julian Date view of this instant.
    pub fn mjd(&self) -> f64 {
        self.value() - MJD_OFFSET
    }

    /// Days elapsed since J2000.0 (negative before the epoch).
    pub fn days_since_j2000(&self) -> f64 {
        self.value() - J2000_JD
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self::new(julian_date(dt))
    }

    /// Convert to chrono DateTime<Utc>.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        let secs = (self.value() - UNIX_EPOCH_JD) * SECONDS_PER_DAY;
        let secs_i64 = secs.floor() as i64;
        let nanos = ((secs - secs.floor()) * 1e9) as u32;
        DateTime::from_timestamp(secs_i64, nanos).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

impl From<f64> for JulianDate {
    fn from(v: f64) -> Self {
        JulianDate::new(v)
    }
}

/// Convert a UTC instant to a Julian Date.
///
/// Uses the integer Gregorian day-number algorithm (Fliegel & Van Flandern),
/// valid for any date after the 1582 calendar reform. The fractional part
/// encodes the time of day, counted from noon.
pub fn julian_date(instant: &DateTime<Utc>) -> f64 {
    let year = instant.year() as i64;
    let month = instant.month() as i64;
    let day = instant.day() as i64;

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let day_number = day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;

    let seconds_of_day = instant.num_seconds_from_midnight() as f64
        + instant.nanosecond() as f64 / 1e9;

    day_number as f64 - 0.5 + seconds_of_day / SECONDS_PER_DAY
}
