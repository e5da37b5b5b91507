//! Public API surface for the visibility kernel.
//!
//! This file consolidates the value types handed to the presentation layer.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::CelestialPosition;
pub use crate::models::EphemerisSample;
pub use crate::models::GeographicVisibility;
pub use crate::models::HorizontalPosition;
pub use crate::models::LatitudeBand;
pub use crate::models::ObserverLocation;
pub use crate::models::RiseSet;
pub use crate::models::VisibilityForecast;
pub use crate::models::VisibilityQuality;
pub use crate::models::VisibilityStatus;
pub use crate::models::VisibilityWindow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::coordinates::format_horizontal;

/// Render-ready digest of a forecast for status badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub is_visible: bool,
    pub quality: VisibilityQuality,
    /// Human label for `quality`
    pub quality_label: String,
    /// Current position, e.g. `Alt: 21° 15', Az: 178° (S)`
    pub position: String,
    pub next_rise: Option<DateTime<Utc>>,
    pub next_set: Option<DateTime<Utc>>,
    pub window_count: usize,
    pub visibility_percentage: f64,
}

impl ForecastSummary {
    pub fn from_forecast(forecast: &VisibilityForecast) -> Self {
        let status = &forecast.current_status;
        Self {
            is_visible: status.is_visible,
            quality: status.quality,
            quality_label: status.quality.description().to_string(),
            position: format_horizontal(&status.horizontal()),
            next_rise: forecast.next_rise,
            next_set: forecast.next_set,
            window_count: forecast.windows.len(),
            visibility_percentage: forecast.visibility_percentage,
        }
    }
}

impl From<&VisibilityForecast> for ForecastSummary {
    fn from(forecast: &VisibilityForecast) -> Self {
        ForecastSummary::from_forecast(forecast)
    }
}
