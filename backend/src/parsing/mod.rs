//! Loaders for ephemeris provider output and observer locations.
//!
//! # Example
//!
//! ```no_run
//! use iso_visibility::parsing::parse_ephemeris_json;
//! use std::path::Path;
//!
//! let samples = parse_ephemeris_json(Path::new("ephemeris.json"))
//!     .expect("Failed to parse ephemeris");
//! ```

pub mod ephemeris_parser;


pub use ephemeris_parser::{parse_ephemeris_json, parse_ephemeris_json_str, parse_observer_json_str};
