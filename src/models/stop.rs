//! Delivery stop type.

use serde::{Deserialize, Serialize};

use super::{Coordinate, TimeSlot};
use crate::error::{Result, RoutingError};

/// Heaviest parcel a single stop may carry, in kg.
pub const MAX_STOP_WEIGHT_KG: f64 = 1000.0;

/// Largest parcel a single stop may carry, in m³.
pub const MAX_STOP_VOLUME_M3: f64 = 10.0;

/// A delivery to be placed on a tour.
///
/// Stops refer to their customer and tour by id only. The `order` and
/// `assigned_tour` fields are the optimizer's output channel: `order` is the
/// 1-based position within the route and both are cleared together by
/// [`Stop::unassign`].
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Coordinate, Stop};
///
/// let stop = Stop::new(1, Coordinate::new(48.85, 2.35), 12.5, 0.4);
/// assert_eq!(stop.id(), 1);
/// assert!(stop.order().is_none());
/// assert!(stop.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: u64,
    customer_id: Option<u64>,
    location: Coordinate,
    weight: f64,
    volume: f64,
    preferred_time_slot: Option<TimeSlot>,
    order: Option<u32>,
    assigned_tour: Option<u64>,
}

impl Stop {
    /// Creates an unassigned stop.
    pub fn new(id: u64, location: Coordinate, weight: f64, volume: f64) -> Self {
        Self {
            id,
            customer_id: None,
            location,
            weight,
            volume,
            preferred_time_slot: None,
            order: None,
            assigned_tour: None,
        }
    }

    /// Links this stop to the customer it delivers to.
    pub fn with_customer(mut self, customer_id: u64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Sets the preferred delivery slot.
    pub fn with_time_slot(mut self, slot: TimeSlot) -> Self {
        self.preferred_time_slot = Some(slot);
        self
    }

    /// Overrides the delivery location (defaults to the customer's address).
    pub fn with_location(mut self, location: Coordinate) -> Self {
        self.location = location;
        self
    }

    /// Stop ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Customer this stop delivers to, if known.
    pub fn customer_id(&self) -> Option<u64> {
        self.customer_id
    }

    /// Delivery location.
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Parcel weight in kg.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Parcel volume in m³.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Preferred delivery slot, if any.
    pub fn preferred_time_slot(&self) -> Option<&TimeSlot> {
        self.preferred_time_slot.as_ref()
    }

    /// 1-based position within the route, once optimized.
    pub fn order(&self) -> Option<u32> {
        self.order
    }

    /// Tour this stop is assigned to, if any.
    pub fn assigned_tour(&self) -> Option<u64> {
        self.assigned_tour
    }

    /// Sets the position within the current route.
    pub fn set_order(&mut self, order: u32) {
        self.order = Some(order);
    }

    /// Assigns this stop to a tour at the given position.
    pub fn assign_to(&mut self, tour_id: u64, order: u32) {
        self.assigned_tour = Some(tour_id);
        self.order = Some(order);
    }

    /// Removes this stop from its tour, clearing its position.
    pub fn unassign(&mut self) {
        self.assigned_tour = None;
        self.order = None;
    }

    /// Checks weight, volume and location against the accepted ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.weight > 0.0 && self.weight <= MAX_STOP_WEIGHT_KG) {
            return Err(RoutingError::InvalidWeight {
                stop_id: self.id,
                weight: self.weight,
            });
        }
        if !(self.volume > 0.0 && self.volume <= MAX_STOP_VOLUME_M3) {
            return Err(RoutingError::InvalidVolume {
                stop_id: self.id,
                volume: self.volume,
            });
        }
        self.location.validate()
    }
}
