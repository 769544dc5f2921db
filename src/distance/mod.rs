//! Geographic distances.
//!
//! Provides the haversine great-circle distance and a dense distance
//! matrix rooted at the depot.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, route_distance, EARTH_RADIUS_KM};
pub use matrix::{DistanceMatrix, DEPOT};
