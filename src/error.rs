//! Error types raised while validating records and assembling tours.
//!
//! The heuristics themselves are infallible; everything here comes from the
//! boundary (record validation, parsing) or from the assembler's capacity
//! pre-check.

use thiserror::Error;

/// Errors raised by the routing crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// The vehicle cannot carry every stop of the tour at once.
    #[error(
        "vehicle {vehicle_id} cannot carry {stop_count} stops \
         (weight {total_weight:.1}kg/{max_weight:.1}kg, \
         volume {total_volume:.2}m³/{max_volume:.2}m³, \
         stops {stop_count}/{max_stop_count})"
    )]
    CapacityExceeded {
        /// Vehicle the tour was planned for.
        vehicle_id: u64,
        /// Number of stops requested.
        stop_count: usize,
        /// Aggregate stop weight in kg.
        total_weight: f64,
        /// Vehicle weight limit in kg.
        max_weight: f64,
        /// Aggregate stop volume in m³.
        total_volume: f64,
        /// Vehicle volume limit in m³.
        max_volume: f64,
        /// Vehicle stop-count limit.
        max_stop_count: usize,
    },
    /// The tour has no stops to optimize.
    #[error("tour {tour_id} has no stops")]
    EmptyTour {
        /// Tour being assembled.
        tour_id: u64,
    },
    /// The tour exceeds the configured stops-per-tour limit.
    #[error("tour {tour_id} has {count} stops, limit is {limit}")]
    TooManyStops {
        /// Tour being assembled.
        tour_id: u64,
        /// Number of stops requested.
        count: usize,
        /// Configured limit.
        limit: usize,
    },
    /// Latitude or longitude outside the valid range.
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },
    /// Stop weight outside (0, 1000] kg.
    #[error("stop {stop_id} has invalid weight {weight}kg")]
    InvalidWeight {
        /// Offending stop.
        stop_id: u64,
        /// Weight as supplied.
        weight: f64,
    },
    /// Stop volume outside (0, 10] m³.
    #[error("stop {stop_id} has invalid volume {volume}m³")]
    InvalidVolume {
        /// Offending stop.
        stop_id: u64,
        /// Volume as supplied.
        volume: f64,
    },
    /// Time slot text not in `HH:MM-HH:MM` form.
    #[error("invalid time slot {value:?}, expected HH:MM-HH:MM")]
    InvalidTimeSlot {
        /// Text as supplied.
        value: String,
    },
    /// Algorithm name not recognised.
    #[error("unknown optimization algorithm {name:?}")]
    UnknownAlgorithm {
        /// Name as supplied.
        name: String,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
