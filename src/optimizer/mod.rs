//! The tour optimizer abstraction.
//!
//! - [`TourOptimizer`] — the contract every ordering heuristic satisfies
//! - [`AlgorithmType`] — selector used by the tour-management layer
//! - [`Optimizer`] — closed dispatch over the built-in heuristics
//! - [`FallbackOptimizer`] — wraps a fallible [`ExternalOptimizer`] and
//!   degrades to nearest neighbor

mod fallback;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constructive::{ClarkeWrightOptimizer, NearestNeighborOptimizer};
use crate::distance::route_distance;
use crate::error::RoutingError;
use crate::models::{Depot, Stop, VehicleProfile};

pub use fallback::{ExternalOptimizer, FallbackOptimizer};

/// Orders the stops of one tour around a depot.
///
/// Implementations only decide the visit order; the provided methods apply
/// it to the stops and measure it, so every optimizer shares the same
/// output and distance semantics. Optimizers are stateless between calls.
pub trait TourOptimizer {
    /// Human-readable algorithm name, used in logs.
    fn algorithm_name(&self) -> &'static str;

    /// Returns a permutation of `0..stops.len()`: the positions of `stops`
    /// in visit order.
    ///
    /// The provided methods check this. An order that skips or repeats a
    /// position is logged and replaced by the input order.
    fn visit_order(
        &self,
        depot: &Depot,
        stops: &[Stop],
        vehicle: Option<&VehicleProfile>,
    ) -> Vec<usize>;

    /// Reorders `stops` and sets each stop's `order` to its 1-based position.
    ///
    /// Empty input yields an empty route.
    fn calculate_optimal_tour(
        &self,
        depot: &Depot,
        stops: Vec<Stop>,
        vehicle: Option<&VehicleProfile>,
    ) -> Vec<Stop> {
        let order = checked_visit_order(self, depot, &stops, vehicle);
        let route = apply_visit_order(stops, &order);
        debug!(
            algorithm = self.algorithm_name(),
            stops = route.len(),
            "final route assigned"
        );
        route
    }

    /// Depot-to-depot distance in km of the route this optimizer builds for
    /// `stops` (with no vehicle limits).
    ///
    /// The ordering is recomputed rather than taken from the input.
    fn calculate_total_distance(&self, depot: &Depot, stops: &[Stop]) -> f64 {
        if stops.is_empty() {
            return 0.0;
        }
        let order = checked_visit_order(self, depot, stops, None);
        route_distance(depot.location(), order.iter().map(|&i| stops[i].location()))
    }
}

/// Runs `optimizer` and returns its order if it is a permutation of the
/// stop positions, the input order otherwise.
fn checked_visit_order<O>(
    optimizer: &O,
    depot: &Depot,
    stops: &[Stop],
    vehicle: Option<&VehicleProfile>,
) -> Vec<usize>
where
    O: TourOptimizer + ?Sized,
{
    let order = optimizer.visit_order(depot, stops, vehicle);
    if is_permutation(&order, stops.len()) {
        return order;
    }
    warn!(
        algorithm = optimizer.algorithm_name(),
        returned = order.len(),
        stops = stops.len(),
        "visit order is not a permutation of the stops, keeping input order"
    );
    (0..stops.len()).collect()
}

/// True if `order` holds every position of `0..n` exactly once.
fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    order
        .iter()
        .all(|&i| i < n && !std::mem::replace(&mut seen[i], true))
}

/// Moves the stops into visit order and numbers them from 1.
///
/// `order` must be a permutation of the stop positions.
fn apply_visit_order(stops: Vec<Stop>, order: &[usize]) -> Vec<Stop> {
    let mut slots: Vec<Option<Stop>> = stops.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
        .zip(1u32..)
        .map(|(mut stop, position)| {
            stop.set_order(position);
            stop
        })
        .collect()
}

/// Built-in optimization algorithms.
///
/// # Examples
///
/// ```
/// use delivery_routing::optimizer::AlgorithmType;
///
/// let a: AlgorithmType = "clarke_wright".parse().unwrap();
/// assert_eq!(a, AlgorithmType::ClarkeWright);
/// assert_eq!(a.to_string(), "CLARKE_WRIGHT");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlgorithmType {
    /// Greedy nearest-unvisited-stop walk.
    #[default]
    NearestNeighbor,
    /// Clarke & Wright savings merge.
    ClarkeWright,
}

impl AlgorithmType {
    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NearestNeighbor => "NEAREST_NEIGHBOR",
            Self::ClarkeWright => "CLARKE_WRIGHT",
        }
    }
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmType {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NEAREST_NEIGHBOR" => Ok(Self::NearestNeighbor),
            "CLARKE_WRIGHT" => Ok(Self::ClarkeWright),
            _ => Err(RoutingError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// One of the built-in optimizers, selected by [`AlgorithmType`].
#[derive(Debug, Clone, Copy)]
pub enum Optimizer {
    /// See [`NearestNeighborOptimizer`].
    NearestNeighbor(NearestNeighborOptimizer),
    /// See [`ClarkeWrightOptimizer`].
    ClarkeWright(ClarkeWrightOptimizer),
}

impl Optimizer {
    /// Returns the optimizer implementing `algorithm`.
    pub fn for_algorithm(algorithm: AlgorithmType) -> Self {
        match algorithm {
            AlgorithmType::NearestNeighbor => Self::NearestNeighbor(NearestNeighborOptimizer::new()),
            AlgorithmType::ClarkeWright => Self::ClarkeWright(ClarkeWrightOptimizer::new()),
        }
    }

    /// The algorithm this optimizer implements.
    pub fn algorithm(&self) -> AlgorithmType {
        match self {
            Self::NearestNeighbor(_) => AlgorithmType::NearestNeighbor,
            Self::ClarkeWright(_) => AlgorithmType::ClarkeWright,
        }
    }
}

impl From<AlgorithmType> for Optimizer {
    fn from(algorithm: AlgorithmType) -> Self {
        Self::for_algorithm(algorithm)
    }
}

impl TourOptimizer for Optimizer {
    fn algorithm_name(&self) -> &'static str {
        match self {
            Self::NearestNeighbor(o) => o.algorithm_name(),
            Self::ClarkeWright(o) => o.algorithm_name(),
        }
    }

    fn visit_order(
        &self,
        depot: &Depot,
        stops: &[Stop],
        vehicle: Option<&VehicleProfile>,
    ) -> Vec<usize> {
        match self {
            Self::NearestNeighbor(o) => o.visit_order(depot, stops, vehicle),
            Self::ClarkeWright(o) => o.visit_order(depot, stops, vehicle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::haversine_km;
    use crate::models::{Coordinate, TimeSlot};

    fn depot() -> Depot {
        Depot::new(1, Coordinate::new(0.0, 0.0), TimeSlot::new(360, 1320).expect("valid"))
    }

    fn stops() -> Vec<Stop> {
        vec![
            Stop::new(10, Coordinate::new(0.0, 3.0), 1.0, 1.0),
            Stop::new(11, Coordinate::new(0.0, 1.0), 1.0, 1.0),
            Stop::new(12, Coordinate::new(0.0, 2.0), 1.0, 1.0),
        ]
    }

    /// Visits stops in reverse input order.
    struct Reverse;

    impl TourOptimizer for Reverse {
        fn algorithm_name(&self) -> &'static str {
            "reverse"
        }

        fn visit_order(&self, _: &Depot, stops: &[Stop], _: Option<&VehicleProfile>) -> Vec<usize> {
            (0..stops.len()).rev().collect()
        }
    }

    #[test]
    fn test_apply_visit_order_numbers_from_one() {
        let route = apply_visit_order(stops(), &[1, 2, 0]);
        let ids: Vec<u64> = route.iter().map(Stop::id).collect();
        let orders: Vec<Option<u32>> = route.iter().map(Stop::order).collect();
        assert_eq!(ids, vec![11, 12, 10]);
        assert_eq!(orders, vec![Some(1), Some(2), Some(3)]);
    }

    /// Visits the first stop twice and skips the rest.
    struct Stutter;

    impl TourOptimizer for Stutter {
        fn algorithm_name(&self) -> &'static str {
            "stutter"
        }

        fn visit_order(&self, _: &Depot, stops: &[Stop], _: Option<&VehicleProfile>) -> Vec<usize> {
            vec![0; stops.len().min(2)]
        }
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[], 0));
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
    }

    #[test]
    fn test_invalid_visit_order_keeps_every_stop() {
        let route = Stutter.calculate_optimal_tour(&depot(), stops(), None);
        let ids: Vec<u64> = route.iter().map(Stop::id).collect();
        let orders: Vec<Option<u32>> = route.iter().map(Stop::order).collect();
        assert_eq!(ids, vec![10, 11, 12]);
        assert_eq!(orders, vec![Some(1), Some(2), Some(3)]);

        let d = Stutter.calculate_total_distance(&depot(), &stops());
        let hop = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        // 0 -> 3 -> 1 -> 2 -> 0 along the equator
        assert!((d - 8.0 * hop).abs() < 1e-6);
    }

    #[test]
    fn test_provided_methods_follow_visit_order() {
        let route = Reverse.calculate_optimal_tour(&depot(), stops(), None);
        let ids: Vec<u64> = route.iter().map(Stop::id).collect();
        assert_eq!(ids, vec![12, 11, 10]);

        let d = Reverse.calculate_total_distance(&depot(), &stops());
        let hop = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        // 0 -> 2 -> 1 -> 3 -> 0 along the equator
        assert!((d - 8.0 * hop).abs() < 1e-6);
    }

    #[test]
    fn test_empty_input() {
        let optimizer = Optimizer::for_algorithm(AlgorithmType::ClarkeWright);
        assert!(optimizer.calculate_optimal_tour(&depot(), Vec::new(), None).is_empty());
        assert_eq!(optimizer.calculate_total_distance(&depot(), &[]), 0.0);
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!(
            "NEAREST_NEIGHBOR".parse::<AlgorithmType>(),
            Ok(AlgorithmType::NearestNeighbor)
        );
        assert_eq!(
            " clarke_wright ".parse::<AlgorithmType>(),
            Ok(AlgorithmType::ClarkeWright)
        );
        assert_eq!(
            "AI_OPTIMIZER".parse::<AlgorithmType>(),
            Err(RoutingError::UnknownAlgorithm {
                name: "AI_OPTIMIZER".into()
            })
        );
    }

    #[test]
    fn test_algorithm_serde() {
        let json = serde_json::to_string(&AlgorithmType::ClarkeWright).expect("serialize");
        assert_eq!(json, "\"CLARKE_WRIGHT\"");
        let back: AlgorithmType = serde_json::from_str("\"NEAREST_NEIGHBOR\"").expect("deserialize");
        assert_eq!(back, AlgorithmType::NearestNeighbor);
    }

    #[test]
    fn test_dispatch_matches_algorithm() {
        for algorithm in [AlgorithmType::NearestNeighbor, AlgorithmType::ClarkeWright] {
            let optimizer = Optimizer::from(algorithm);
            assert_eq!(optimizer.algorithm(), algorithm);
        }
        assert_eq!(
            Optimizer::for_algorithm(AlgorithmType::NearestNeighbor).algorithm_name(),
            NearestNeighborOptimizer::new().algorithm_name()
        );
    }
}
