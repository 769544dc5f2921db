//! Aggregate load and vehicle capacity checks.

use std::ops::Add;

use crate::models::{Stop, VehicleProfile};

/// Aggregate demand of a set of stops.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Load {
    /// Total weight in kg.
    pub weight: f64,
    /// Total volume in m³.
    pub volume: f64,
    /// Number of stops.
    pub count: usize,
}

impl Load {
    /// Load of a single stop.
    pub fn single(stop: &Stop) -> Self {
        Self {
            weight: stop.weight(),
            volume: stop.volume(),
            count: 1,
        }
    }

    /// Sums the load of the given stops.
    pub fn of<'a, I>(stops: I) -> Self
    where
        I: IntoIterator<Item = &'a Stop>,
    {
        stops
            .into_iter()
            .fold(Self::default(), |acc, stop| acc + Self::single(stop))
    }

    /// Returns `true` if this load fits the vehicle (always, when absent).
    pub fn fits(&self, vehicle: Option<&VehicleProfile>) -> bool {
        fits(vehicle, self.weight, self.volume, self.count)
    }
}

impl Add for Load {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            weight: self.weight + rhs.weight,
            volume: self.volume + rhs.volume,
            count: self.count + rhs.count,
        }
    }
}

/// Checks an aggregate load against a vehicle's limits.
///
/// Returns `true` when no vehicle is given. Otherwise every bound is
/// inclusive.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::VehicleProfile;
/// use delivery_routing::evaluation::fits;
///
/// let v = VehicleProfile::new(1, 100.0, 2.0, 3);
/// assert!(fits(Some(&v), 100.0, 2.0, 3));
/// assert!(!fits(Some(&v), 100.0, 2.0, 4));
/// assert!(fits(None, 1e9, 1e9, usize::MAX));
/// ```
pub fn fits(
    vehicle: Option<&VehicleProfile>,
    total_weight: f64,
    total_volume: f64,
    stop_count: usize,
) -> bool {
    match vehicle {
        Some(v) => v.can_carry(total_weight, total_volume, stop_count),
        None => true,
    }
}
