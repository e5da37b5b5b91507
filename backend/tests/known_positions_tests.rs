//! Coordinate transform checks against known sky positions.

mod support;

use approx::assert_abs_diff_eq;
use iso_visibility::config::VisibilitySettings;
use iso_visibility::models::{CelestialPosition, EphemerisSample, ObserverLocation};
use iso_visibility::services::{evaluate_visibility, geographic_visibility, ra_dec_to_alt_az};
use iso_visibility::time::{gmst, julian_date, local_sidereal_time};
use iso_visibility::KernelError;
use support::{greenwich, sydney, utc};

const SIRIUS: (f64, f64) = (6.7525, -16.7161);
const POLARIS: (f64, f64) = (2.5301, 89.2641);

#[test]
fn test_gmst_at_j2000() {
    let h = gmst(&utc(2000, 1, 1, 12, 0, 0)).value();
    assert_abs_diff_eq!(h, 18.697, epsilon = 0.01);
}

#[test]
fn test_julian_date_known_value() {
    // 1999-01-01 00:00 UTC = JD 2451179.5
    assert_eq!(julian_date(&utc(1999, 1, 1, 0, 0, 0)), 2_451_179.5);
}

#[test]
fn test_sirius_from_greenwich_is_repeatable() {
    let instant = utc(2024, 1, 15, 22, 0, 0);
    let sirius = CelestialPosition::new(SIRIUS.0, SIRIUS.1);

    let first = ra_dec_to_alt_az(&sirius, &greenwich(), &instant).unwrap();
    let second = ra_dec_to_alt_az(&sirius, &greenwich(), &instant).unwrap();

    assert!(first.altitude.value() > -90.0 && first.altitude.value() < 90.0);
    assert!(first.azimuth.value() >= 0.0 && first.azimuth.value() < 360.0);
    assert_eq!(first.altitude.value().to_bits(), second.altitude.value().to_bits());
    assert_eq!(first.azimuth.value().to_bits(), second.azimuth.value().to_bits());
}

#[test]
fn test_sirius_near_culmination_from_greenwich() {
    // Mid-January, Sirius transits around 23:30 UTC at about 21.8° in the south.
    let instant = utc(2024, 1, 15, 23, 30, 0);
    let sirius = CelestialPosition::new(SIRIUS.0, SIRIUS.1);
    let pos = ra_dec_to_alt_az(&sirius, &greenwich(), &instant).unwrap();

    assert_abs_diff_eq!(pos.altitude.value(), 21.8, epsilon = 0.5);
    assert!(pos.azimuth.value() > 170.0 && pos.azimuth.value() < 190.0);
}

#[test]
fn test_polaris_altitude_tracks_latitude() {
    let polaris = CelestialPosition::new(POLARIS.0, POLARIS.1);
    for hour in [0, 6, 12, 18] {
        let pos = ra_dec_to_alt_az(&polaris, &greenwich(), &utc(2024, 1, 15, hour, 0, 0)).unwrap();
        assert!(
            pos.altitude.value() > 40.0 && pos.altitude.value() < 60.0,
            "Polaris at {} on {}h",
            pos.altitude.value(),
            hour
        );
    }
}

#[test]
fn test_polaris_never_visible_from_sydney() {
    let settings = VisibilitySettings::default();
    let sample = EphemerisSample::new(utc(2024, 1, 15, 12, 0, 0), POLARIS.0, POLARIS.1);
    let status = evaluate_visibility(&sample, &sydney(), None, &settings).unwrap();
    assert!(!status.is_visible);
    assert!(status.altitude.value() < -30.0);
}

#[test]
fn test_lst_offset_for_sydney() {
    let instant = utc(2024, 1, 15, 12, 0, 0);
    let expected = (gmst(&instant).value() + 151.2093 / 15.0).rem_euclid(24.0);
    let lst = local_sidereal_time(sydney().longitude_deg(), &instant).value();
    assert_abs_diff_eq!(lst, expected, epsilon = 1e-9);
}

#[test]
fn test_geographic_range_matches_observers() {
    // Polaris is circumpolar from Greenwich, invisible from Sydney.
    let range = geographic_visibility(qtty::Degrees::new(POLARIS.1)).unwrap();
    let circumpolar = range.always_visible.unwrap();
    assert!(circumpolar.contains(greenwich().latitude));
    assert!(sydney().latitude < range.min_latitude.value());
}

#[test]
fn test_out_of_range_observer_fails_before_computation() {
    let observer = ObserverLocation {
        latitude: 91.0,
        longitude: 0.0,
        elevation_m: None,
    };
    let err = ra_dec_to_alt_az(
        &CelestialPosition::new(SIRIUS.0, SIRIUS.1),
        &observer,
        &utc(2024, 1, 15, 22, 0, 0),
    )
    .unwrap_err();
    assert!(matches!(err, KernelError::InvalidLocation(_)));
    assert!(ObserverLocation::new(0.0, -180.5, None).is_err());
}
