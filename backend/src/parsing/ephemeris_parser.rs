use anyhow::{anyhow, bail, Context, Result};
use log::warn;
use serde_json::Value;
use std::path::Path;

use crate::models::{validate_samples, EphemerisSample, ObserverLocation};

/// Parse an ephemeris JSON file into validated, time-ordered samples.
pub fn parse_ephemeris_json(json_path: &Path) -> Result<Vec<EphemerisSample>> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read ephemeris file: {}", json_path.display()))?;

    parse_ephemeris_json_str(&json_content)
        .with_context(|| format!("Failed to load ephemeris from {}", json_path.display()))
}

/// Parse ephemeris JSON from a string.
///
/// Accepts either a bare array of samples or an object with an `ephemeris`
/// array. Samples out of time order are stably re-sorted (with a warning);
/// anything else malformed is an error naming the offending field.
pub fn parse_ephemeris_json_str(json_str: &str) -> Result<Vec<EphemerisSample>> {
    let json_value: Value = serde_json::from_str(json_str).with_context(|| {
        let preview: String = json_str.chars().take(200).collect();
        format!("Invalid JSON syntax. First 200 chars: {}", preview)
    })?;

    let (samples_value, prefix) = match json_value {
        Value::Array(_) => (json_value, ""),
        Value::Object(mut map) => {
            let keys: Vec<String> = map.keys().cloned().collect();
            match map.remove("ephemeris") {
                Some(samples) => (samples, "ephemeris"),
                None => bail!(
                    "JSON object must contain an 'ephemeris' key. Found keys: {:?}",
                    keys
                ),
            }
        }
        other => bail!(
            "Expected an array of samples or an object with an 'ephemeris' key, found: {}",
            other
        ),
    };

    let mut samples: Vec<EphemerisSample> = serde_path_to_error::deserialize(samples_value)
        .map_err(|e| {
            anyhow!(
                "Invalid ephemeris sample at {}{}: {}",
                prefix,
                e.path(),
                e.inner()
            )
        })?;

    if samples.windows(2).any(|pair| pair[1].timestamp < pair[0].timestamp) {
        warn!(
            "Ephemeris samples are not in time order; sorting {} samples by timestamp",
            samples.len()
        );
        samples.sort_by_key(|sample| sample.timestamp);
    }

    validate_samples(&samples).context("Ephemeris failed validation")?;
    Ok(samples)
}

/// Parse and validate an observer location from JSON.
pub fn parse_observer_json_str(json_str: &str) -> Result<ObserverLocation> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    let observer: ObserverLocation = serde_path_to_error::deserialize(deserializer)
        .map_err(|e| anyhow!("Invalid observer location at {}: {}", e.path(), e.inner()))?;

    observer
        .validate()
        .context("Observer location out of range")?;
    Ok(observer)
}
