//! Domain model types for delivery tour optimization.
//!
//! Records are lightweight projections of the persisted entities: stops
//! refer to their customer and tour by id, never by reference.

mod coordinate;
mod depot;
mod route;
mod stop;
mod time_slot;
mod vehicle;

pub use coordinate::Coordinate;
pub use depot::Depot;
pub use route::Route;
pub use stop::{Stop, MAX_STOP_VOLUME_M3, MAX_STOP_WEIGHT_KG};
pub use time_slot::TimeSlot;
pub use vehicle::VehicleProfile;
