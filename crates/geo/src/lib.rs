//! Geodesy helpers for claim coordinates.

mod bounds;
mod distance;

pub use bounds::BoundingBox;
pub use distance::{haversine_m, EARTH_RADIUS_M};
