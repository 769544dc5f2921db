//! Nearest-neighbor tour construction.
//!
//! Starting from the depot, always visit the nearest unvisited stop.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops. Tours hold tens of stops, so the dense
//! scan is cheaper than any spatial index.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Tours are typically
//! 15-25% above optimal, which is acceptable for a fast baseline.

use tracing::{debug, instrument, Level};

use crate::distance::{DistanceMatrix, DEPOT};
use crate::models::{Depot, Stop, VehicleProfile};
use crate::optimizer::TourOptimizer;

/// Greedy nearest-unvisited-stop optimizer.
///
/// Ties are broken by input order: of two equally near stops, the one
/// listed first is visited first. The vehicle profile is accepted but not
/// consulted; capacity is checked before stops are put on the tour.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Coordinate, Depot, Stop};
/// use delivery_routing::constructive::NearestNeighborOptimizer;
/// use delivery_routing::optimizer::TourOptimizer;
///
/// let depot = Depot::new(1, Coordinate::new(0.0, 0.0), "06:00-22:00".parse().unwrap());
/// let stops = vec![
///     Stop::new(1, Coordinate::new(0.0, 3.0), 10.0, 0.1),
///     Stop::new(2, Coordinate::new(0.0, 1.0), 10.0, 0.1),
///     Stop::new(3, Coordinate::new(0.0, 2.0), 10.0, 0.1),
/// ];
///
/// let route = NearestNeighborOptimizer::new().calculate_optimal_tour(&depot, stops, None);
/// let ids: Vec<u64> = route.iter().map(|s| s.id()).collect();
/// assert_eq!(ids, vec![2, 3, 1]);
/// assert_eq!(route[0].order(), Some(1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborOptimizer;

impl NearestNeighborOptimizer {
    /// Creates the optimizer.
    pub fn new() -> Self {
        Self
    }
}

impl TourOptimizer for NearestNeighborOptimizer {
    fn algorithm_name(&self) -> &'static str {
        "nearest neighbor"
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(stops = stops.len()))]
    fn visit_order(
        &self,
        depot: &Depot,
        stops: &[Stop],
        _vehicle: Option<&VehicleProfile>,
    ) -> Vec<usize> {
        if stops.is_empty() {
            return Vec::new();
        }

        let distances = DistanceMatrix::from_stops(depot, stops);
        let order = nearest_neighbor_walk(&distances);
        debug!(stops = order.len(), "nearest neighbor walk complete");

        order.into_iter().map(|idx| idx - 1).collect()
    }
}

/// Walks the matrix from the depot, returning matrix indices (depot excluded).
fn nearest_neighbor_walk(distances: &DistanceMatrix) -> Vec<usize> {
    let mut unvisited: Vec<usize> = (1..distances.size()).collect();
    let mut route = Vec::with_capacity(unvisited.len());
    let mut current = DEPOT;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&idx| idx != next);
        route.push(next);
        current = next;
    }

    route
}
