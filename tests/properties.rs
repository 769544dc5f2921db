//! Property-based tests for the tour optimizers.
//!
//! # Invariants tested
//!
//! - **Permutation:** the optimal tour holds every input stop exactly once.
//! - **Contiguous order:** `order` values are exactly `1..=N`, in route order.
//! - **Distance:** haversine is symmetric and zero on identical points; the
//!   reported tour distance matches the returned route, including on
//!   lattice addresses where savings and neighbor distances tie.
//! - **Determinism:** repeated runs on the same input give the same route.
//! - **Capacity:** Clarke-Wright never builds a multi-stop route that
//!   exceeds the vehicle profile.

use proptest::prelude::*;

use delivery_routing::assembler::{RouteAssembler, TourPlan};
use delivery_routing::constructive::ClarkeWrightOptimizer;
use delivery_routing::distance::{haversine_km, route_distance};
use delivery_routing::evaluation::Load;
use delivery_routing::models::{Coordinate, Depot, Stop, TimeSlot, VehicleProfile};
use delivery_routing::optimizer::{AlgorithmType, Optimizer, TourOptimizer};

fn depot() -> Depot {
    Depot::new(
        1,
        Coordinate::new(45.0, 5.0),
        TimeSlot::new(360, 1320).expect("valid slot"),
    )
}

fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

/// Stops scattered within about a degree of the depot.
fn stops_strategy(max_len: usize) -> impl Strategy<Value = Vec<Stop>> {
    prop::collection::vec(
        (44.0f64..46.0, 4.0f64..6.0, 0.5f64..200.0, 0.01f64..3.0),
        0..max_len,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (lat, lon, weight, volume))| {
                Stop::new(i as u64 + 1, Coordinate::new(lat, lon), weight, volume)
            })
            .collect()
    })
}

/// Stops on a 0.1° lattice around a depot at the origin, so many pairwise
/// distances and savings are equal.
fn lattice_stops_strategy(max_len: usize) -> impl Strategy<Value = Vec<Stop>> {
    prop::collection::vec((-4i32..=4, -4i32..=4), 1..max_len).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(i, (row, col))| {
                let location = Coordinate::new(f64::from(row) * 0.1, f64::from(col) * 0.1);
                Stop::new(i as u64 + 1, location, 1.0, 0.01)
            })
            .collect()
    })
}

fn vehicle_strategy() -> impl Strategy<Value = Option<VehicleProfile>> {
    prop::option::of(
        (100.0f64..1500.0, 1.0f64..20.0, 1usize..8)
            .prop_map(|(w, v, n)| VehicleProfile::new(1, w, v, n)),
    )
}

fn algorithm_strategy() -> impl Strategy<Value = AlgorithmType> {
    prop_oneof![
        Just(AlgorithmType::NearestNeighbor),
        Just(AlgorithmType::ClarkeWright),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the optimal tour is a permutation of the input with
    /// contiguous 1-based orders.
    #[test]
    fn tour_is_numbered_permutation(
        stops in stops_strategy(15),
        vehicle in vehicle_strategy(),
        algorithm in algorithm_strategy(),
    ) {
        let optimizer = Optimizer::for_algorithm(algorithm);
        let route = optimizer.calculate_optimal_tour(&depot(), stops.clone(), vehicle.as_ref());

        prop_assert_eq!(route.len(), stops.len());

        let mut input_ids: Vec<u64> = stops.iter().map(Stop::id).collect();
        let mut output_ids: Vec<u64> = route.iter().map(Stop::id).collect();
        input_ids.sort_unstable();
        output_ids.sort_unstable();
        prop_assert_eq!(input_ids, output_ids);

        for (i, stop) in route.iter().enumerate() {
            prop_assert_eq!(stop.order(), Some(i as u32 + 1));
        }
    }

    /// Property: the reported distance is the length of the route the
    /// optimizer returns when no vehicle limits apply.
    #[test]
    fn distance_matches_returned_route(
        stops in stops_strategy(12),
        algorithm in algorithm_strategy(),
    ) {
        let optimizer = Optimizer::for_algorithm(algorithm);
        let depot = depot();
        let route = optimizer.calculate_optimal_tour(&depot, stops.clone(), None);
        let measured = route_distance(depot.location(), route.iter().map(Stop::location));
        let reported = optimizer.calculate_total_distance(&depot, &stops);
        prop_assert_eq!(measured, reported);
        prop_assert!(reported >= 0.0);
    }

    /// Property: the assembled route reports the length of its own stop
    /// order when ties make the ordering sensitive to input order.
    #[test]
    fn assembled_distance_matches_route_on_lattice(
        stops in lattice_stops_strategy(18),
        algorithm in algorithm_strategy(),
    ) {
        let depot = Depot::new(
            1,
            Coordinate::new(0.0, 0.0),
            TimeSlot::new(360, 1320).expect("valid slot"),
        );
        let plan = TourPlan { tour_id: 1, depot: depot.clone(), vehicle: None, stops };
        let route = RouteAssembler::default()
            .assemble(plan, algorithm)
            .expect("valid plan without vehicle");
        let measured = route_distance(depot.location(), route.stops().iter().map(Stop::location));
        prop_assert_eq!(measured, route.total_distance());
    }

    /// Property: running an optimizer twice on the same input gives the
    /// same route.
    #[test]
    fn optimizers_are_deterministic(
        stops in stops_strategy(12),
        vehicle in vehicle_strategy(),
        algorithm in algorithm_strategy(),
    ) {
        let optimizer = Optimizer::for_algorithm(algorithm);
        let first = optimizer.calculate_optimal_tour(&depot(), stops.clone(), vehicle.as_ref());
        let second = optimizer.calculate_optimal_tour(&depot(), stops, vehicle.as_ref());
        prop_assert_eq!(first, second);
    }

    /// Property: Clarke-Wright merges never overload the vehicle.
    #[test]
    fn clarke_wright_merges_respect_capacity(
        stops in stops_strategy(12),
        vehicle in vehicle_strategy(),
    ) {
        let routes = ClarkeWrightOptimizer::new().build_routes(&depot(), &stops, vehicle.as_ref());

        let mut seen: Vec<usize> = routes.iter().flatten().copied().collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..stops.len()).collect::<Vec<_>>());

        for route in routes.iter().filter(|r| r.len() > 1) {
            let load = Load::of(route.iter().map(|&i| &stops[i]));
            prop_assert!(load.fits(vehicle.as_ref()));
        }
    }

    /// Property: haversine is symmetric and zero on identical points.
    #[test]
    fn haversine_symmetric_and_zero(a in coordinate_strategy(), b in coordinate_strategy()) {
        prop_assert_eq!(haversine_km(a, a), 0.0);
        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        prop_assert!(ab >= 0.0);
        prop_assert!((ab - ba).abs() < 1e-9);
    }
}
