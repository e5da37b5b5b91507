use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observer-relative position: height above the horizon and compass bearing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HorizontalPosition {
    /// Altitude in degrees `[-90, 90]`
    pub altitude: qtty::Degrees,
    /// Azimuth in degrees `[0, 360)`, measured from north through east
    pub azimuth: qtty::Degrees,
}

/// Ordinal viewing quality.
///
/// Variant order is the quality order, so `Ord` compares quality directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityQuality {
    NotVisible,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl VisibilityQuality {
    /// Wire label, as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityQuality::NotVisible => "not_visible",
            VisibilityQuality::Poor => "poor",
            VisibilityQuality::Fair => "fair",
            VisibilityQuality::Good => "good",
            VisibilityQuality::Excellent => "excellent",
        }
    }

    /// Human-readable description for status badges.
    pub fn description(&self) -> &'static str {
        match self {
            VisibilityQuality::Excellent => "Excellent viewing conditions",
            VisibilityQuality::Good => "Good viewing conditions",
            VisibilityQuality::Fair => "Fair viewing conditions",
            VisibilityQuality::Poor => "Poor viewing conditions (low on horizon)",
            VisibilityQuality::NotVisible => "Not visible (below horizon)",
        }
    }
}

impl std::fmt::Display for VisibilityQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visibility of an object at one instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisibilityStatus {
    pub is_visible: bool,
    /// Geometric altitude
    pub altitude: qtty::Degrees,
    pub azimuth: qtty::Degrees,
    /// Altitude after atmospheric refraction
    pub apparent_altitude: qtty::Degrees,
    /// Relative air mass along the line of sight; absent below the horizon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airmass: Option<f64>,
    pub quality: VisibilityQuality,
    pub timestamp: DateTime<Utc>,
}

impl VisibilityStatus {
    pub fn horizontal(&self) -> HorizontalPosition {
        HorizontalPosition {
            altitude: self.altitude,
            azimuth: self.azimuth,
        }
    }
}

/// One contiguous run of visible samples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisibilityWindow {
    pub start: DateTime<Utc>,
    /// Timestamp of the last visible sample of the run
    pub end: DateTime<Utc>,
    pub duration_minutes: f64,
    /// Highest apparent altitude reached during the window
    pub max_altitude: qtty::Degrees,
    pub quality: VisibilityQuality,
}

impl VisibilityWindow {
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}

/// Next horizon crossings after a reference instant.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct RiseSet {
    pub next_rise: Option<DateTime<Utc>>,
    pub next_set: Option<DateTime<Utc>>,
}

/// Everything the presentation layer needs to render an object's visibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisibilityForecast {
    pub current_status: VisibilityStatus,
    pub next_rise: Option<DateTime<Utc>>,
    pub next_set: Option<DateTime<Utc>>,
    /// Upcoming windows, ordered by start
    pub windows: Vec<VisibilityWindow>,
    /// Share of samples with the object visible, 0-100
    pub visibility_percentage: f64,
}

/// Closed band of latitudes, in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatitudeBand {
    pub min_latitude: qtty::Degrees,
    pub max_latitude: qtty::Degrees,
}

impl LatitudeBand {
    pub fn contains(&self, latitude: f64) -> bool {
        self.min_latitude.value() <= latitude && latitude <= self.max_latitude.value()
    }
}

/// Latitudes from which an object at a fixed declination can be seen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeographicVisibility {
    /// Southernmost latitude from which the object ever rises
    pub min_latitude: qtty::Degrees,
    /// Northernmost latitude from which the object ever rises
    pub max_latitude: qtty::Degrees,
    /// Latitudes where the object never sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_visible: Option<LatitudeBand>,
}
