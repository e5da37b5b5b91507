#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use iso_visibility::models::{EphemerisSample, ObserverLocation};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Holds a process-wide lock for the duration so tests touching `ISO_*` or
/// `OBSERVER_*` variables cannot interleave. Previous values are restored on
/// drop, including during unwinding.
///
/// `Some(v)` sets a variable, `None` removes it.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::apply(changes);
    f()
}

struct EnvRestore {
    previous: Vec<(String, Option<String>)>,
}

impl EnvRestore {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let names: HashSet<&str> = changes.iter().map(|(name, _)| *name).collect();
        let previous = names
            .into_iter()
            .map(|name| (name.to_string(), std::env::var(name).ok()))
            .collect();

        for (name, value) in changes {
            set_or_remove(name, *value);
        }
        Self { previous }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (name, value) in self.previous.drain(..) {
            set_or_remove(&name, value.as_deref());
        }
    }
}

fn set_or_remove(name: &str, value: Option<&str>) {
    match value {
        Some(v) => std::env::set_var(name, v),
        None => std::env::remove_var(name),
    }
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Royal Observatory, Greenwich.
pub fn greenwich() -> ObserverLocation {
    ObserverLocation::new(51.4779, 0.0015, None).unwrap()
}

pub fn sydney() -> ObserverLocation {
    ObserverLocation::new(-33.8688, 151.2093, Some(58.0)).unwrap()
}

/// Fixed-position samples every `step_minutes` starting at `start`.
pub fn fixed_samples(
    start: DateTime<Utc>,
    count: usize,
    step_minutes: i64,
    ra_hours: f64,
    dec_deg: f64,
) -> Vec<EphemerisSample> {
    (0..count)
        .map(|i| {
            EphemerisSample::new(
                start + Duration::minutes(step_minutes * i as i64),
                ra_hours,
                dec_deg,
            )
        })
        .collect()
}

pub fn sirius_hourly(start: DateTime<Utc>, hours: usize) -> Vec<EphemerisSample> {
    fixed_samples(start, hours, 60, 6.7525, -16.7161)
}
