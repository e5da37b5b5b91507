pub mod ephemeris;
pub mod location;
pub mod visibility;

pub use ephemeris::*;
pub use location::*;
pub use visibility::*;
