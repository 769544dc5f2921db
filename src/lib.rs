//! # delivery-routing
//!
//! Delivery tour optimization: orders the stops of a tour around its depot
//! to keep travel distance low, subject to the vehicle's capacity.
//!
//! ## Modules
//!
//! - [`models`] — Domain records (Coordinate, Stop, Depot, VehicleProfile, Route)
//! - [`distance`] — Haversine distance and depot-rooted distance matrix
//! - [`evaluation`] — Aggregate load and capacity checks
//! - [`constructive`] — Nearest-neighbor and Clarke-Wright heuristics
//! - [`optimizer`] — The optimizer contract, algorithm selection and fallback
//! - [`assembler`] — Tour assembly with capacity pre-check
//! - [`error`] — Error type

pub mod assembler;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod optimizer;

pub use error::{Result, RoutingError};
