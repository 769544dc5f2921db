//! Great-circle distance between coordinates.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers.
///
/// Symmetric and zero for identical points. Inputs are not validated;
/// non-finite coordinates yield NaN.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::Coordinate;
/// use delivery_routing::distance::haversine_km;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// assert!((haversine_km(a, b) - 111.19).abs() < 0.01);
/// assert_eq!(haversine_km(a, a), 0.0);
/// ```
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Length of the closed tour depot → stops... → depot, in kilometers.
///
/// Returns 0 for an empty sequence.
pub fn route_distance<I>(depot: Coordinate, stops: I) -> f64
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut total = 0.0;
    let mut prev = depot;
    let mut visited_any = false;

    for location in stops {
        total += haversine_km(prev, location);
        prev = location;
        visited_any = true;
    }

    if visited_any {
        total += haversine_km(prev, depot);
    }
    total
}
