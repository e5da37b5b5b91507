//! Visibility kernel services.
//!
//! Components are layered leaves first: the coordinate transform feeds the
//! refraction model, which feeds the quality classifier; together they make
//! up the status evaluator. Timelines, event/window queries and forecasts are
//! built on top. Every function is pure and depends only on its arguments.

pub mod atmosphere;
pub mod coordinates;
pub mod events;
pub mod forecast;
pub mod geographic;
pub mod quality;
pub mod visibility;

pub use atmosphere::{airmass, apply_refraction, AtmosphericConditions};
pub use coordinates::{
    angular_separation, compass_point, format_horizontal, is_above_horizon, ra_dec_to_alt_az,
};
pub use events::{
    best_in_timeline, calculate_visibility_percentage, find_best_observation_time,
    find_next_rise_set, find_visibility_windows, percentage_in_timeline, rise_set_in_timeline,
    windows_in_timeline,
};
pub use forecast::generate_forecast;
pub use geographic::geographic_visibility;
pub use quality::assess_quality;
pub use visibility::{evaluate_visibility, generate_timeline};
