//! Capacity feasibility checking.

mod capacity;

pub use capacity::{fits, Load};
