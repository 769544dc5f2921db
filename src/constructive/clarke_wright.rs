//! Clarke-Wright savings algorithm.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each stop on
//! its own route (depot → stop → depot). It then merges routes by
//! computing the "savings" of serving two stops back to back instead of
//! with two round trips:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! Routes are merged in decreasing order of savings, only at route
//! endpoints, and subject to the vehicle's weight, volume and stop-count
//! limits.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of stops (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use tracing::{debug, instrument, Level};

use crate::distance::{DistanceMatrix, DEPOT};
use crate::evaluation::Load;
use crate::models::{Depot, Stop, VehicleProfile};
use crate::optimizer::TourOptimizer;

/// A savings value for serving two stops consecutively.
///
/// `i` and `j` are stop positions with `i < j`.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: f64,
}

/// Savings-based merge optimizer.
///
/// When every merge succeeds the result is a single route. When merges are
/// blocked (by capacity or because a stop is no longer at a route end)
/// several routes survive; [`ClarkeWrightOptimizer::build_routes`] exposes
/// them and the tour is their concatenation, so no stop is ever dropped.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Coordinate, Depot, Stop};
/// use delivery_routing::constructive::ClarkeWrightOptimizer;
/// use delivery_routing::optimizer::TourOptimizer;
///
/// let depot = Depot::new(1, Coordinate::new(0.0, 0.0), "06:00-22:00".parse().unwrap());
/// let stops = vec![
///     Stop::new(1, Coordinate::new(0.0, 1.0), 10.0, 0.1),
///     Stop::new(2, Coordinate::new(0.0, 2.0), 10.0, 0.1),
///     Stop::new(3, Coordinate::new(0.0, 3.0), 10.0, 0.1),
/// ];
///
/// let cw = ClarkeWrightOptimizer::new();
/// assert_eq!(cw.build_routes(&depot, &stops, None).len(), 1);
///
/// let route = cw.calculate_optimal_tour(&depot, stops, None);
/// assert_eq!(route.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ClarkeWrightOptimizer;

impl ClarkeWrightOptimizer {
    /// Creates the optimizer.
    pub fn new() -> Self {
        Self
    }

    /// Runs the savings merge and returns every surviving route as stop
    /// positions in visit order.
    ///
    /// A merged route takes the slot of the route holding the first stop of
    /// the saving pair; routes are listed by slot, so untouched singletons
    /// keep their input order.
    #[instrument(skip_all, level = Level::DEBUG, fields(stops = stops.len()))]
    pub fn build_routes(
        &self,
        depot: &Depot,
        stops: &[Stop],
        vehicle: Option<&VehicleProfile>,
    ) -> Vec<Vec<usize>> {
        let n = stops.len();
        if n <= 1 {
            return (0..n).map(|i| vec![i]).collect();
        }

        let distances = DistanceMatrix::from_stops(depot, stops);
        let savings = compute_savings(&distances, n);
        debug!(savings = savings.len(), "savings computed");

        // route_of[stop] = slot holding the stop's route
        let mut route_of: Vec<usize> = (0..n).collect();
        let mut route_members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        let mut route_load: Vec<Load> = stops.iter().map(Load::single).collect();
        let mut remaining = n;

        for saving in &savings {
            if remaining == 1 {
                break;
            }

            let ri = route_of[saving.i];
            let rj = route_of[saving.j];
            if ri == rj {
                continue;
            }

            let combined_load = route_load[ri] + route_load[rj];
            if !combined_load.fits(vehicle) {
                continue;
            }

            let Some(merged) =
                splice(&route_members[ri], &route_members[rj], saving.i, saving.j)
            else {
                continue;
            };

            for &stop in &merged {
                route_of[stop] = ri;
            }
            route_members[ri] = merged;
            route_members[rj].clear();
            route_load[ri] = combined_load;
            route_load[rj] = Load::default();
            remaining -= 1;
        }

        debug!(routes = remaining, "merge pass complete");
        route_members.into_iter().filter(|r| !r.is_empty()).collect()
    }
}

impl TourOptimizer for ClarkeWrightOptimizer {
    fn algorithm_name(&self) -> &'static str {
        "clarke-wright"
    }

    fn visit_order(
        &self,
        depot: &Depot,
        stops: &[Stop],
        vehicle: Option<&VehicleProfile>,
    ) -> Vec<usize> {
        let routes = self.build_routes(depot, stops, vehicle);
        if routes.len() > 1 {
            debug!(
                routes = routes.len(),
                "savings merge left several routes, visiting them back to back"
            );
        }
        routes.into_iter().flatten().collect()
    }
}

/// Computes savings for every unordered stop pair, sorted by decreasing value.
///
/// Equal savings keep their generation order (i ascending, then j).
fn compute_savings(distances: &DistanceMatrix, n: usize) -> Vec<Saving> {
    let mut savings = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (i + 1, j + 1);
            let value = distances.get(DEPOT, a) + distances.get(DEPOT, b) - distances.get(a, b);
            savings.push(Saving { i, j, value });
        }
    }
    savings.sort_by(|x, y| y.value.total_cmp(&x.value));
    savings
}

/// Joins two routes through stops `i` (in `first`) and `j` (in `second`).
///
/// Returns `None` unless both stops sit at an end of their route.
fn splice(first: &[usize], second: &[usize], i: usize, j: usize) -> Option<Vec<usize>> {
    let first_starts = first.first() == Some(&i);
    let first_ends = first.last() == Some(&i);
    let second_starts = second.first() == Some(&j);
    let second_ends = second.last() == Some(&j);

    let merged: Vec<usize> = if first_ends && second_starts {
        first.iter().chain(second).copied().collect()
    } else if first_starts && second_ends {
        second.iter().chain(first).copied().collect()
    } else if first_ends && second_ends {
        first.iter().chain(second.iter().rev()).copied().collect()
    } else if first_starts && second_starts {
        first.iter().rev().chain(second).copied().collect()
    } else {
        return None;
    };
    Some(merged)
}
