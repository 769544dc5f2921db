//! Optimized route type.

use serde::{Deserialize, Serialize};

use super::Stop;
use crate::evaluation::Load;

/// An ordered sequence of stops served from one depot.
///
/// A route starts and ends at the depot, which is not stored in `stops`.
/// Each stop carries its 1-based `order` within the route.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Coordinate, Route, Stop};
///
/// let mut a = Stop::new(1, Coordinate::new(0.0, 1.0), 5.0, 0.1);
/// a.set_order(1);
/// let route = Route::new(vec![a], 222.4);
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.stop_ids(), vec![1]);
/// assert_eq!(route.total_distance(), 222.4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<Stop>,
    total_distance: f64,
}

impl Route {
    /// Creates a route from already ordered stops and their distance in km.
    pub fn new(stops: Vec<Stop>, total_distance: f64) -> Self {
        Self {
            stops,
            total_distance,
        }
    }

    /// Returns the ordered stops.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Consumes the route, returning its stops.
    pub fn into_stops(self) -> Vec<Stop> {
        self.stops
    }

    /// Number of stops (excluding depot).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns the stop IDs in visit order.
    pub fn stop_ids(&self) -> Vec<u64> {
        self.stops.iter().map(Stop::id).collect()
    }

    /// Depot-to-depot distance in km.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Aggregate weight, volume and stop count carried.
    pub fn load(&self) -> Load {
        Load::of(&self.stops)
    }
}
