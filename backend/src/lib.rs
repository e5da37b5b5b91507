//! # ISO Visibility Kernel
//!
//! Coordinate transformation and visibility forecasting for tracked
//! interstellar objects.
//!
//! Given time-stamped equatorial positions of an object (supplied by an
//! external ephemeris provider) and an observer's location, this crate
//! determines whether the object is above the horizon at any instant, where
//! it is in the sky and how good the view is, and forecasts rise/set events
//! and visibility windows.
//!
//! ## Features
//!
//! - **Time Handling**: Julian Dates, Greenwich and local mean sidereal time
//! - **Coordinates**: RA/Dec to Alt/Az, angular separation, compass bearings
//! - **Atmosphere**: Bennett refraction and Pickering air mass
//! - **Visibility**: per-instant status, timelines, windows, rise/set, forecasts
//! - **Geography**: latitude bands from which an object is visible or circumpolar
//!
//! ## Architecture
//!
//! - [`time`]: angle normalization, Julian Dates and sidereal time
//! - [`models`]: value types (observer, ephemeris samples, statuses, windows)
//! - [`services`]: the kernel components, leaves first
//! - [`parsing`]: JSON loaders for ephemeris files and observer locations
//! - [`config`]: TOML/env visibility settings
//! - [`api`]: DTOs consumed by the presentation layer
//!
//! Nothing in the kernel reads the wall clock: every "now" is an argument,
//! so identical inputs always produce identical outputs and every function
//! is safe to call concurrently.
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use iso_visibility::config::VisibilitySettings;
//! use iso_visibility::models::{EphemerisSample, ObserverLocation};
//! use iso_visibility::services::generate_forecast;
//!
//! let observer = ObserverLocation::new(51.4779, 0.0015, None).unwrap();
//! let start = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
//! let samples: Vec<_> = (0..48)
//!     .map(|h| EphemerisSample::new(start + chrono::Duration::hours(h), 6.7525, -16.7161))
//!     .collect();
//!
//! let forecast =
//!     generate_forecast(&samples, &observer, &start, &VisibilitySettings::default()).unwrap();
//! assert!(forecast.visibility_percentage > 0.0);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;
pub mod time;

pub use config::VisibilitySettings;
pub use error::{KernelError, KernelResult};
