//! Depot (warehouse) type.

use serde::{Deserialize, Serialize};

use super::{Coordinate, TimeSlot};
use crate::error::Result;

/// The fixed start and end point of every route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    id: u64,
    location: Coordinate,
    opening_hours: TimeSlot,
}

impl Depot {
    /// Creates a depot.
    pub fn new(id: u64, location: Coordinate, opening_hours: TimeSlot) -> Self {
        Self {
            id,
            location,
            opening_hours,
        }
    }

    /// Depot ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Depot location.
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Daily opening hours.
    pub fn opening_hours(&self) -> &TimeSlot {
        &self.opening_hours
    }

    /// Checks the depot location.
    pub fn validate(&self) -> Result<()> {
        self.location.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depot_new() {
        let hours = TimeSlot::new(360, 1320).expect("valid");
        let d = Depot::new(1, Coordinate::new(48.9, 2.3), hours);
        assert_eq!(d.id(), 1);
        assert_eq!(d.location(), Coordinate::new(48.9, 2.3));
        assert_eq!(d.opening_hours().to_string(), "06:00-22:00");
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_depot_invalid_location() {
        let hours = TimeSlot::new(0, 60).expect("valid");
        let d = Depot::new(1, Coordinate::new(0.0, 200.0), hours);
        assert!(d.validate().is_err());
    }
}
