//! Range of Earth latitudes from which an object can be seen.

use crate::error::{KernelError, KernelResult};
use crate::models::{GeographicVisibility, LatitudeBand};

/// Latitude band from which an object at `declination` ever rises, plus the
/// band where it is circumpolar.
///
/// An object at declination `d` clears the horizon somewhere in its daily
/// circle for latitudes in `[max(d - 90, -90), min(d + 90, 90)]`. It never
/// sets north of `90 - d` when `d > 0`, or south of `-90 - d` when `d < 0`;
/// an object exactly on the celestial equator is circumpolar nowhere.
pub fn geographic_visibility(declination: qtty::Degrees) -> KernelResult<GeographicVisibility> {
    let d = declination.value();
    if !d.is_finite() || !(-90.0..=90.0).contains(&d) {
        return Err(KernelError::InvalidDeclination(d));
    }

    let always_visible = if d > 0.0 {
        Some(LatitudeBand {
            min_latitude: qtty::Degrees::new(90.0 - d),
            max_latitude: qtty::Degrees::new(90.0),
        })
    } else if d < 0.0 {
        Some(LatitudeBand {
            min_latitude: qtty::Degrees::new(-90.0),
            max_latitude: qtty::Degrees::new(-90.0 - d),
        })
    } else {
        None
    };

    Ok(GeographicVisibility {
        min_latitude: qtty::Degrees::new((d - 90.0).max(-90.0)),
        max_latitude: qtty::Degrees::new((d + 90.0).min(90.0)),
        always_visible,
    })
}
