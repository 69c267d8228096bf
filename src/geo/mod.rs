//! Geographic primitives: value types and great-circle distance.

mod coordinate;
mod distance;

pub use coordinate::{Coordinate, Region, Sample};
pub use distance::{bearing, destination, distance, EARTH_RADIUS_M};
