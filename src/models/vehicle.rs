//! Vehicle profile with capacity limits.

use serde::{Deserialize, Serialize};

/// Capacity limits of the vehicle a tour is planned for.
///
/// All limits are inclusive: a load exactly at the limit fits.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::VehicleProfile;
///
/// let v = VehicleProfile::new(4, 800.0, 12.0, 25).with_range(300.0);
/// assert_eq!(v.id(), 4);
/// assert_eq!(v.max_stop_count(), 25);
/// assert!(v.can_carry(800.0, 12.0, 25));
/// assert!(!v.can_carry(800.1, 12.0, 25));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    id: u64,
    max_weight: f64,
    max_volume: f64,
    max_stop_count: usize,
    range_km: Option<f64>,
}

impl VehicleProfile {
    /// Creates a profile with the given limits and no range limit.
    pub fn new(id: u64, max_weight: f64, max_volume: f64, max_stop_count: usize) -> Self {
        Self {
            id,
            max_weight,
            max_volume,
            max_stop_count,
            range_km: None,
        }
    }

    /// Sets the operating range in km.
    pub fn with_range(mut self, range_km: f64) -> Self {
        self.range_km = Some(range_km);
        self
    }

    /// Vehicle ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Maximum payload in kg.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Maximum payload volume in m³.
    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    /// Maximum number of stops per tour.
    pub fn max_stop_count(&self) -> usize {
        self.max_stop_count
    }

    /// Operating range in km, if limited.
    pub fn range_km(&self) -> Option<f64> {
        self.range_km
    }

    /// Returns `true` if the aggregate load is within every limit.
    pub fn can_carry(&self, weight: f64, volume: f64, stop_count: usize) -> bool {
        weight <= self.max_weight && volume <= self.max_volume && stop_count <= self.max_stop_count
    }
}
