//! Forecast assembly: current status, next events and upcoming windows.

use chrono::{DateTime, Utc};
use log::debug;

use crate::config::VisibilitySettings;
use crate::error::KernelResult;
use crate::models::{EphemerisSample, ObserverLocation, VisibilityForecast};

use super::events::{percentage_in_timeline, rise_set_in_timeline, windows_in_timeline};
use super::visibility::{generate_timeline, status_for};

/// Build the full forecast for an object as seen by `observer` at `now`.
///
/// `now` is always supplied by the caller. The current status uses the
/// latest sample at or before `now` (the first sample if `now` precedes the
/// data), evaluated at `now` itself. Rise/set and windows are searched from
/// `now`; the visibility percentage covers the whole sample sequence.
///
/// # Errors
/// Same as [`generate_timeline`]: invalid observer or settings, empty or
/// malformed samples.
pub fn generate_forecast(
    samples: &[EphemerisSample],
    observer: &ObserverLocation,
    now: &DateTime<Utc>,
    settings: &VisibilitySettings,
) -> KernelResult<VisibilityForecast> {
    let timeline = generate_timeline(samples, observer, settings)?;

    let current_index = samples
        .partition_point(|sample| sample.timestamp <= *now)
        .saturating_sub(1);
    let current_status = status_for(&samples[current_index], observer, now, settings);

    let events = rise_set_in_timeline(&timeline, now);
    let windows = windows_in_timeline(&timeline, settings.forecast.window_count, now);
    let visibility_percentage = percentage_in_timeline(&timeline);

    debug!(
        "Forecast at {}: visible={}, {} windows, {:.1}% of samples visible",
        now,
        current_status.is_visible,
        windows.len(),
        visibility_percentage
    );

    Ok(VisibilityForecast {
        current_status,
        next_rise: events.next_rise,
        next_set: events.next_set,
        windows,
        visibility_percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KernelError;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    fn greenwich() -> ObserverLocation {
        ObserverLocation::new(51.4779, 0.0015, None).unwrap()
    }

    fn hourly(ra: f64, dec: f64, hours: i64) -> Vec<EphemerisSample> {
        (0..hours)
            .map(|h| EphemerisSample::new(start() + Duration::hours(h), ra, dec))
            .collect()
    }

    #[test]
    fn test_empty_forecast() {
        let err = generate_forecast(&[], &greenwich(), &start(), &VisibilitySettings::default())
            .unwrap_err();
        assert_eq!(err, KernelError::EmptyEphemeris);
    }

    #[test]
    fn test_current_status_evaluated_at_now() {
        let samples = hourly(6.7525, -16.7161, 48);
        let now = start() + Duration::minutes(90);
        let forecast =
            generate_forecast(&samples, &greenwich(), &now, &VisibilitySettings::default()).unwrap();
        assert_eq!(forecast.current_status.timestamp, now);
    }

    #[test]
    fn test_now_before_data_uses_first_sample() {
        let samples = hourly(2.5301, 89.2641, 24);
        let now = start() - Duration::days(2);
        let forecast =
            generate_forecast(&samples, &greenwich(), &now, &VisibilitySettings::default()).unwrap();
        assert!(forecast.current_status.is_visible);
        assert_eq!(forecast.visibility_percentage, 100.0);
        assert_eq!(forecast.next_rise, None);
        assert_eq!(forecast.next_set, None);
        assert_eq!(forecast.windows.len(), 1);
    }

    #[test]
    fn test_window_count_from_settings() {
        let samples = hourly(6.7525, -16.7161, 24 * 10);
        let mut settings = VisibilitySettings::default();
        settings.forecast.window_count = 3;

        let forecast = generate_forecast(&samples, &greenwich(), &start(), &settings).unwrap();
        assert_eq!(forecast.windows.len(), 3);
        for pair in forecast.windows.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn test_never_visible_object() {
        let samples = hourly(12.0, -80.0, 48);
        let forecast =
            generate_forecast(&samples, &greenwich(), &start(), &VisibilitySettings::default())
                .unwrap();
        assert!(!forecast.current_status.is_visible);
        assert!(forecast.windows.is_empty());
        assert_eq!(forecast.visibility_percentage, 0.0);
    }
}
