//! Per-instant visibility status and sample timelines.

use chrono::{DateTime, Utc};
use log::debug;

use crate::config::VisibilitySettings;
use crate::error::{KernelError, KernelResult};
use crate::models::{validate_samples, EphemerisSample, ObserverLocation, VisibilityQuality, VisibilityStatus};

use super::atmosphere::{airmass, apply_refraction};
use super::coordinates::{horizontal_unchecked, is_above_horizon};
use super::quality::assess_quality;

/// Evaluate the visibility of one sample.
///
/// `instant` defaults to the sample's own timestamp; passing a different
/// instant evaluates the sample's position at that moment (the position is
/// assumed not to move meaningfully in between).
///
/// An object is visible when its apparent altitude reaches
/// `settings.horizon.min_altitude_deg`. Objects below that threshold are
/// always graded [`VisibilityQuality::NotVisible`]; visible objects are graded
/// at least [`VisibilityQuality::Poor`], even under a negative horizon.
pub fn evaluate_visibility(
    sample: &EphemerisSample,
    observer: &ObserverLocation,
    instant: Option<&DateTime<Utc>>,
    settings: &VisibilitySettings,
) -> KernelResult<VisibilityStatus> {
    observer.validate()?;
    settings.validate()?;
    sample
        .check()
        .map_err(|reason| KernelError::malformed(0, reason))?;

    Ok(status_for(
        sample,
        observer,
        instant.unwrap_or(&sample.timestamp),
        settings,
    ))
}

/// Map every sample to its visibility status, preserving order.
///
/// # Errors
/// * `InvalidLocation` if the observer is out of range (checked first)
/// * `Configuration` if `settings` fail [`VisibilitySettings::validate`]
/// * `EmptyEphemeris` if `samples` is empty
/// * `MalformedSample` for the first sample that fails validation
pub fn generate_timeline(
    samples: &[EphemerisSample],
    observer: &ObserverLocation,
    settings: &VisibilitySettings,
) -> KernelResult<Vec<VisibilityStatus>> {
    observer.validate()?;
    settings.validate()?;
    if samples.is_empty() {
        return Err(KernelError::EmptyEphemeris);
    }
    validate_samples(samples)?;

    debug!(
        "Generating visibility timeline: {} samples, observer ({:.4}, {:.4})",
        samples.len(),
        observer.latitude,
        observer.longitude
    );

    Ok(samples
        .iter()
        .map(|sample| status_for(sample, observer, &sample.timestamp, settings))
        .collect())
}

/// Status computation for inputs that were already validated.
pub(crate) fn status_for(
    sample: &EphemerisSample,
    observer: &ObserverLocation,
    instant: &DateTime<Utc>,
    settings: &VisibilitySettings,
) -> VisibilityStatus {
    let horizontal = horizontal_unchecked(&sample.position(), observer, instant);
    let apparent_altitude = apply_refraction(horizontal.altitude, &settings.atmosphere);
    let is_visible = is_above_horizon(apparent_altitude, settings.horizon.min_altitude());

    let quality = if is_visible {
        assess_quality(apparent_altitude, sample.magnitude).max(VisibilityQuality::Poor)
    } else {
        VisibilityQuality::NotVisible
    };

    VisibilityStatus {
        is_visible,
        altitude: horizontal.altitude,
        azimuth: horizontal.azimuth,
        apparent_altitude,
        airmass: airmass(apparent_altitude),
        quality,
        timestamp: *instant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn greenwich() -> ObserverLocation {
        ObserverLocation::new(51.4779, 0.0015, None).unwrap()
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 22, 0, 0).unwrap()
    }

    #[test]
    fn test_circumpolar_object_always_visible() {
        let settings = VisibilitySettings::default();
        let polaris = EphemerisSample::new(start(), 2.5301, 89.2641);
        let status = evaluate_visibility(&polaris, &greenwich(), None, &settings).unwrap();

        assert!(status.is_visible);
        assert!(status.apparent_altitude.value() >= status.altitude.value());
        assert!(status.airmass.is_some());
        assert_eq!(status.timestamp, start());
    }

    #[test]
    fn test_never_rising_object_not_visible() {
        let settings = VisibilitySettings::default();
        let south = EphemerisSample::new(start(), 12.0, -80.0);
        let status = evaluate_visibility(&south, &greenwich(), None, &settings).unwrap();

        assert!(!status.is_visible);
        assert_eq!(status.quality, VisibilityQuality::NotVisible);
        assert_eq!(status.airmass, None);
    }

    #[test]
    fn test_explicit_instant_overrides_timestamp() {
        let settings = VisibilitySettings::default();
        let sample = EphemerisSample::new(start(), 6.7525, -16.7161);
        let later = start() + Duration::hours(6);
        let status = evaluate_visibility(&sample, &greenwich(), Some(&later), &settings).unwrap();

        assert_eq!(status.timestamp, later);
        let at_sample = evaluate_visibility(&sample, &greenwich(), None, &settings).unwrap();
        assert_ne!(status.altitude, at_sample.altitude);
    }

    #[test]
    fn test_raised_horizon_hides_low_object() {
        let mut settings = VisibilitySettings::default();
        let sample = EphemerisSample::new(start(), 2.5301, 89.2641);
        let status = evaluate_visibility(&sample, &greenwich(), None, &settings).unwrap();
        assert!(status.is_visible);

        settings.horizon.min_altitude_deg = 60.0;
        let status = evaluate_visibility(&sample, &greenwich(), None, &settings).unwrap();
        assert!(!status.is_visible);
        assert_eq!(status.quality, VisibilityQuality::NotVisible);
    }

    #[test]
    fn test_negative_horizon_grades_visible_as_poor() {
        let mut settings = VisibilitySettings::default();
        settings.horizon.min_altitude_deg = -5.0;
        // Sirius shortly after setting, a few degrees below the geometric horizon
        let sirius = EphemerisSample::new(Utc.with_ymd_and_hms(2024, 1, 15, 4, 10, 0).unwrap(), 6.7525, -16.7161);
        let status = evaluate_visibility(&sirius, &greenwich(), None, &settings).unwrap();

        assert!(status.apparent_altitude.value() < 0.0);
        assert!(status.is_visible);
        assert_eq!(status.quality, VisibilityQuality::Poor);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = VisibilitySettings::default();
        settings.atmosphere.temperature_c = -273.0;
        let sample = EphemerisSample::new(start(), 6.7525, -16.7161);

        let err = evaluate_visibility(&sample, &greenwich(), None, &settings).unwrap_err();
        assert!(matches!(err, KernelError::Configuration(_)));
        let err = generate_timeline(&[sample], &greenwich(), &settings).unwrap_err();
        assert!(matches!(err, KernelError::Configuration(_)));
    }

    #[test]
    fn test_malformed_sample_rejected() {
        let settings = VisibilitySettings::default();
        let bad = EphemerisSample::new(start(), f64::NAN, 0.0);
        let err = evaluate_visibility(&bad, &greenwich(), None, &settings).unwrap_err();
        assert!(matches!(err, KernelError::MalformedSample { index: 0, .. }));
    }

    #[test]
    fn test_empty_timeline() {
        let settings = VisibilitySettings::default();
        let err = generate_timeline(&[], &greenwich(), &settings).unwrap_err();
        assert_eq!(err, KernelError::EmptyEphemeris);
    }

    #[test]
    fn test_location_checked_before_samples() {
        let settings = VisibilitySettings::default();
        let observer = ObserverLocation {
            latitude: 0.0,
            longitude: 181.0,
            elevation_m: None,
        };
        let err = generate_timeline(&[], &observer, &settings).unwrap_err();
        assert!(matches!(err, KernelError::InvalidLocation(_)));
    }

    #[test]
    fn test_timeline_preserves_order() {
        let settings = VisibilitySettings::default();
        let samples: Vec<_> = (0..24)
            .map(|h| EphemerisSample::new(start() + Duration::hours(h), 6.7525, -16.7161))
            .collect();
        let timeline = generate_timeline(&samples, &greenwich(), &settings).unwrap();

        assert_eq!(timeline.len(), samples.len());
        for (status, sample) in timeline.iter().zip(&samples) {
            assert_eq!(status.timestamp, sample.timestamp);
        }
        assert!(timeline.iter().any(|s| s.is_visible));
        assert!(timeline.iter().any(|s| !s.is_visible));
    }
}
