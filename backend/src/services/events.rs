//! Rise/set events, visibility windows and summary statistics over a timeline.
//!
//! Each query comes in two flavours: a `*_in_timeline` function working on
//! statuses that were already computed, and a sample-level wrapper that
//! builds the timeline first. Only statuses at or after the reference
//! instant `from` are scanned.

use chrono::{DateTime, Utc};

use crate::config::VisibilitySettings;
use crate::error::{KernelError, KernelResult};
use crate::models::{
    EphemerisSample, ObserverLocation, RiseSet, VisibilityQuality, VisibilityStatus,
    VisibilityWindow,
};

use super::quality::assess_quality;
use super::visibility::generate_timeline;

fn upcoming<'a>(
    timeline: &'a [VisibilityStatus],
    from: &DateTime<Utc>,
) -> impl Iterator<Item = &'a VisibilityStatus> + 'a {
    let from = *from;
    timeline.iter().filter(move |status| status.timestamp >= from)
}

/// First rise (not visible -> visible) and first set (visible -> not visible)
/// between consecutive statuses at or after `from`.
///
/// Each event is stamped with the timestamp of the status after the transition.
pub fn rise_set_in_timeline(timeline: &[VisibilityStatus], from: &DateTime<Utc>) -> RiseSet {
    let mut events = RiseSet::default();
    let mut previous: Option<&VisibilityStatus> = None;

    for current in upcoming(timeline, from) {
        if let Some(prev) = previous {
            if !prev.is_visible && current.is_visible && events.next_rise.is_none() {
                events.next_rise = Some(current.timestamp);
            }
            if prev.is_visible && !current.is_visible && events.next_set.is_none() {
                events.next_set = Some(current.timestamp);
            }
            if events.next_rise.is_some() && events.next_set.is_some() {
                break;
            }
        }
        previous = Some(current);
    }

    events
}

/// Open run of visible statuses.
struct WindowBuilder {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    max_altitude: qtty::Degrees,
}

impl WindowBuilder {
    fn open(status: &VisibilityStatus) -> Self {
        Self {
            start: status.timestamp,
            end: status.timestamp,
            max_altitude: status.apparent_altitude,
        }
    }

    fn extend(&mut self, status: &VisibilityStatus) {
        self.end = status.timestamp;
        if status.apparent_altitude > self.max_altitude {
            self.max_altitude = status.apparent_altitude;
        }
    }

    fn close(self) -> VisibilityWindow {
        let duration_minutes = (self.end - self.start).num_milliseconds() as f64 / 60_000.0;
        VisibilityWindow {
            start: self.start,
            end: self.end,
            duration_minutes,
            max_altitude: self.max_altitude,
            quality: assess_quality(self.max_altitude, None).max(VisibilityQuality::Poor),
        }
    }
}

/// Contiguous runs of visible statuses at or after `from`, at most `max_count`.
///
/// A window already open at `from` starts at the first scanned status; a
/// window still open at the end of the data ends at the last status. Windows
/// are disjoint and ordered by start; each ends on its last visible status.
pub fn windows_in_timeline(
    timeline: &[VisibilityStatus],
    max_count: usize,
    from: &DateTime<Utc>,
) -> Vec<VisibilityWindow> {
    let mut windows = Vec::new();
    if max_count == 0 {
        return windows;
    }

    let mut open: Option<WindowBuilder> = None;
    for status in upcoming(timeline, from) {
        if status.is_visible {
            match open.as_mut() {
                Some(builder) => builder.extend(status),
                None => open = Some(WindowBuilder::open(status)),
            }
        } else if let Some(builder) = open.take() {
            windows.push(builder.close());
            if windows.len() == max_count {
                return windows;
            }
        }
    }

    if let Some(builder) = open {
        windows.push(builder.close());
    }
    windows
}

/// Share of statuses with the object visible, in percent. 0 for an empty timeline.
pub fn percentage_in_timeline(timeline: &[VisibilityStatus]) -> f64 {
    if timeline.is_empty() {
        return 0.0;
    }
    let visible = timeline.iter().filter(|status| status.is_visible).count();
    visible as f64 / timeline.len() as f64 * 100.0
}

/// Visible status with the highest apparent altitude at or after `from`.
///
/// Ties go to the earliest status.
pub fn best_in_timeline<'a>(
    timeline: &'a [VisibilityStatus],
    from: &DateTime<Utc>,
) -> Option<&'a VisibilityStatus> {
    upcoming(timeline, from)
        .filter(|status| status.is_visible)
        .fold(None, |best: Option<&VisibilityStatus>, status| match best {
            Some(b) if status.apparent_altitude <= b.apparent_altitude => Some(b),
            _ => Some(status),
        })
}

/// Next rise and set after `from` for a sample sequence.
pub fn find_next_rise_set(
    samples: &[EphemerisSample],
    observer: &ObserverLocation,
    from: &DateTime<Utc>,
    settings: &VisibilitySettings,
) -> KernelResult<RiseSet> {
    let timeline = generate_timeline(samples, observer, settings)?;
    Ok(rise_set_in_timeline(&timeline, from))
}

/// Up to `max_count` visibility windows after `from` for a sample sequence.
pub fn find_visibility_windows(
    samples: &[EphemerisSample],
    observer: &ObserverLocation,
    max_count: usize,
    from: &DateTime<Utc>,
    settings: &VisibilitySettings,
) -> KernelResult<Vec<VisibilityWindow>> {
    let timeline = generate_timeline(samples, observer, settings)?;
    Ok(windows_in_timeline(&timeline, max_count, from))
}

/// Percentage of samples during which the object is visible.
///
/// An empty sequence yields 0 rather than an error; the observer and samples
/// are still validated.
pub fn calculate_visibility_percentage(
    samples: &[EphemerisSample],
    observer: &ObserverLocation,
    settings: &VisibilitySettings,
) -> KernelResult<f64> {
    match generate_timeline(samples, observer, settings) {
        Ok(timeline) => Ok(percentage_in_timeline(&timeline)),
        Err(KernelError::EmptyEphemeris) => Ok(0.0),
        Err(e) => Err(e),
    }
}

/// Best moment to observe after `from`, or `None` if the object is never visible.
pub fn find_best_observation_time(
    samples: &[EphemerisSample],
    observer: &ObserverLocation,
    from: &DateTime<Utc>,
    settings: &VisibilitySettings,
) -> KernelResult<Option<VisibilityStatus>> {
    let timeline = generate_timeline(samples, observer, settings)?;
    Ok(best_in_timeline(&timeline, from).cloned())
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
