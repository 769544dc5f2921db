//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A WGS84 position in decimal degrees.
///
/// Construction does not validate; call [`Coordinate::validate`] at the
/// record boundary. Distances computed from non-finite coordinates are NaN.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::Coordinate;
///
/// let paris = Coordinate::new(48.8566, 2.3522);
/// assert!(paris.validate().is_ok());
/// assert!(Coordinate::new(91.0, 0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Checks that latitude is within [-90, 90] and longitude within [-180, 180].
    pub fn validate(&self) -> Result<()> {
        let lat_ok = (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(RoutingError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}
