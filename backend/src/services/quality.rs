//! Viewing-quality classification.

use crate::models::VisibilityQuality;

/// Grade the viewing quality of an object at `apparent_altitude`.
///
/// Without a magnitude the grade depends on altitude alone (cutoffs at
/// 60°/45°/20°). With a magnitude the object is first placed in a
/// brightness band, each with its own altitude cutoffs; fainter bands top out
/// at a lower grade. All cutoffs are strict, so an object exactly on a cutoff
/// gets the lower grade. Within any band the grade never drops as altitude
/// rises.
pub fn assess_quality(apparent_altitude: qtty::Degrees, magnitude: Option<f64>) -> VisibilityQuality {
    use VisibilityQuality::*;

    let alt = apparent_altitude.value();
    if alt.is_nan() || alt < 0.0 {
        return NotVisible;
    }

    match magnitude {
        Some(mag) if mag > 10.0 => {
            if alt > 60.0 {
                Fair
            } else {
                Poor
            }
        }
        Some(mag) if mag > 6.0 => graded(alt, [(60.0, Good), (30.0, Fair)], Poor),
        Some(mag) if mag > 3.0 => graded(alt, [(60.0, Excellent), (30.0, Good)], Fair),
        Some(_) => graded(alt, [(45.0, Excellent), (20.0, Good)], Fair),
        None => {
            if alt > 60.0 {
                Excellent
            } else if alt > 45.0 {
                Good
            } else if alt > 20.0 {
                Fair
            } else {
                Poor
            }
        }
    }
}

fn graded(
    alt: f64,
    cutoffs: [(f64, VisibilityQuality); 2],
    floor: VisibilityQuality,
) -> VisibilityQuality {
    cutoffs
        .iter()
        .find(|(cutoff, _)| alt > *cutoff)
        .map(|(_, quality)| *quality)
        .unwrap_or(floor)
}
