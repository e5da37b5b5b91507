//! Angle and time utilities.
//!
//! Everything the coordinate transform needs to relate a UTC instant to the
//! rotation of the sky: angle wrapping, Julian Dates, and sidereal time.
//! Degree/radian conversion is handled by the `qtty` quantities themselves
//! (`Degrees::to::<Radian>()`).

pub mod angles;
pub mod julian;
pub mod sidereal;


pub use angles::{normalize_angle, normalize_degrees, normalize_hours};
pub use julian::{julian_date, JulianDate};
pub use sidereal::{gmst, local_sidereal_time};
