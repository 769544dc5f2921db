//! Tour assembly: validate a tour's stops against its vehicle, run the
//! selected optimizer and stamp the result onto the stops.
//!
//! Persisting the returned [`Route`] is left to the caller.

use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, Level};

use crate::distance::route_distance;
use crate::error::{Result, RoutingError};
use crate::evaluation::Load;
use crate::models::{Depot, Route, Stop, VehicleProfile};
use crate::optimizer::{AlgorithmType, Optimizer, TourOptimizer};

/// Assembler configuration.
///
/// Every field has a default, so partial configuration documents work.
///
/// # Examples
///
/// ```
/// use delivery_routing::assembler::AssemblerSettings;
/// use delivery_routing::optimizer::AlgorithmType;
///
/// let settings = AssemblerSettings::default();
/// assert_eq!(settings.default_algorithm, AlgorithmType::NearestNeighbor);
/// assert!(settings.max_stops_per_tour.is_none());
/// assert!(settings.validate_records);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerSettings {
    /// Algorithm used by [`RouteAssembler::assemble_default`].
    pub default_algorithm: AlgorithmType,
    /// Upper bound on stops per tour; `None` for unlimited.
    pub max_stops_per_tour: Option<usize>,
    /// Validate depot and stop records before optimizing.
    pub validate_records: bool,
}

impl Default for AssemblerSettings {
    fn default() -> Self {
        Self {
            default_algorithm: AlgorithmType::NearestNeighbor,
            max_stops_per_tour: None,
            validate_records: true,
        }
    }
}

/// Everything needed to optimize one tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourPlan {
    /// Tour the stops belong to.
    pub tour_id: u64,
    /// Start and end of the route.
    pub depot: Depot,
    /// Vehicle assigned to the tour, if any.
    pub vehicle: Option<VehicleProfile>,
    /// Stops to order.
    pub stops: Vec<Stop>,
}

/// Selects an optimizer, runs it and returns the ordered route with its
/// distance.
#[derive(Debug, Clone, Default)]
pub struct RouteAssembler {
    settings: AssemblerSettings,
}

impl RouteAssembler {
    /// Creates an assembler with the given settings.
    pub fn new(settings: AssemblerSettings) -> Self {
        Self { settings }
    }

    /// Current settings.
    pub fn settings(&self) -> &AssemblerSettings {
        &self.settings
    }

    /// Optimizes the tour with the configured default algorithm.
    pub fn assemble_default(&self, plan: TourPlan) -> Result<Route> {
        self.assemble(plan, self.settings.default_algorithm)
    }

    /// Optimizes the tour with a built-in algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_routing::assembler::{RouteAssembler, TourPlan};
    /// use delivery_routing::models::{Coordinate, Depot, Stop, VehicleProfile};
    /// use delivery_routing::optimizer::AlgorithmType;
    ///
    /// let plan = TourPlan {
    ///     tour_id: 42,
    ///     depot: Depot::new(1, Coordinate::new(0.0, 0.0), "06:00-22:00".parse().unwrap()),
    ///     vehicle: Some(VehicleProfile::new(3, 100.0, 5.0, 10)),
    ///     stops: vec![
    ///         Stop::new(1, Coordinate::new(0.0, 0.2), 10.0, 0.5),
    ///         Stop::new(2, Coordinate::new(0.0, 0.1), 10.0, 0.5),
    ///     ],
    /// };
    ///
    /// let route = RouteAssembler::default()
    ///     .assemble(plan, AlgorithmType::NearestNeighbor)
    ///     .unwrap();
    /// assert_eq!(route.stop_ids(), vec![2, 1]);
    /// assert_eq!(route.stops()[0].assigned_tour(), Some(42));
    /// assert!(route.total_distance() > 0.0);
    /// ```
    pub fn assemble(&self, plan: TourPlan, algorithm: AlgorithmType) -> Result<Route> {
        self.assemble_with(&Optimizer::for_algorithm(algorithm), plan)
    }

    /// Optimizes the tour with any [`TourOptimizer`], such as a
    /// [`FallbackOptimizer`](crate::optimizer::FallbackOptimizer).
    ///
    /// Fails before optimizing if the tour is empty, exceeds the configured
    /// stop limit, holds an invalid record, or cannot fit the vehicle.
    ///
    /// The route's distance is measured on the returned stop order.
    #[instrument(skip_all, level = Level::DEBUG, fields(tour_id = plan.tour_id))]
    pub fn assemble_with<O>(&self, optimizer: &O, plan: TourPlan) -> Result<Route>
    where
        O: TourOptimizer + ?Sized,
    {
        let TourPlan {
            tour_id,
            depot,
            vehicle,
            stops,
        } = plan;

        info!(
            tour_id,
            algorithm = optimizer.algorithm_name(),
            stops = stops.len(),
            "optimizing tour"
        );

        if stops.is_empty() {
            return Err(RoutingError::EmptyTour { tour_id });
        }
        if let Some(limit) = self.settings.max_stops_per_tour {
            if stops.len() > limit {
                return Err(RoutingError::TooManyStops {
                    tour_id,
                    count: stops.len(),
                    limit,
                });
            }
        }
        if self.settings.validate_records {
            depot.validate()?;
            stops.iter().try_for_each(Stop::validate)?;
        }
        if let Err(err) = check_capacity(vehicle.as_ref(), &stops) {
            error!(tour_id, error = %err, "tour rejected");
            return Err(err);
        }

        let mut ordered = optimizer.calculate_optimal_tour(&depot, stops, vehicle.as_ref());
        let total_distance = route_distance(depot.location(), ordered.iter().map(Stop::location));

        for (stop, position) in ordered.iter_mut().zip(1u32..) {
            stop.assign_to(tour_id, position);
        }

        info!(
            tour_id,
            stops = ordered.len(),
            distance_km = total_distance,
            "tour optimized"
        );
        Ok(Route::new(ordered, total_distance))
    }

    /// Orders the stops without capacity checks or tour assignment.
    pub fn preview(
        &self,
        algorithm: AlgorithmType,
        depot: &Depot,
        stops: Vec<Stop>,
        vehicle: Option<&VehicleProfile>,
    ) -> Vec<Stop> {
        Optimizer::for_algorithm(algorithm).calculate_optimal_tour(depot, stops, vehicle)
    }

    /// Distance in km of the route `algorithm` would build for `stops`.
    pub fn total_distance(&self, algorithm: AlgorithmType, depot: &Depot, stops: &[Stop]) -> f64 {
        Optimizer::for_algorithm(algorithm).calculate_total_distance(depot, stops)
    }
}

/// Checks that one vehicle can carry every stop at once.
///
/// Returns the aggregate load on success. With no vehicle every load fits.
pub fn check_capacity(vehicle: Option<&VehicleProfile>, stops: &[Stop]) -> Result<Load> {
    let load = Load::of(stops);
    match vehicle {
        Some(v) if !load.fits(Some(v)) => Err(RoutingError::CapacityExceeded {
            vehicle_id: v.id(),
            stop_count: load.count,
            total_weight: load.weight,
            max_weight: v.max_weight(),
            total_volume: load.volume,
            max_volume: v.max_volume(),
            max_stop_count: v.max_stop_count(),
        }),
        _ => Ok(load),
    }
}
