//! Dense distance matrix rooted at the depot.

use super::haversine_km;
use crate::models::{Coordinate, Depot, Stop};

/// Row index of the depot in a [`DistanceMatrix`].
pub const DEPOT: usize = 0;

/// A dense n×n haversine distance matrix stored in row-major order.
///
/// Index 0 is the depot; stop `i` of the input slice sits at index `i + 1`.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Coordinate, Depot, Stop};
/// use delivery_routing::distance::{DistanceMatrix, DEPOT};
///
/// let depot = Depot::new(1, Coordinate::new(0.0, 0.0), "06:00-22:00".parse().unwrap());
/// let stops = vec![Stop::new(10, Coordinate::new(0.0, 1.0), 1.0, 1.0)];
/// let dm = DistanceMatrix::from_stops(&depot, &stops);
/// assert_eq!(dm.size(), 2);
/// assert!((dm.get(DEPOT, 1) - 111.19).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the matrix over `[depot, stops...]`.
    pub fn from_stops(depot: &Depot, stops: &[Stop]) -> Self {
        let locations: Vec<Coordinate> = std::iter::once(depot.location())
            .chain(stops.iter().map(Stop::location))
            .collect();
        Self::from_locations(&locations)
    }

    /// Computes a symmetric haversine matrix from coordinates.
    pub fn from_locations(locations: &[Coordinate]) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(locations[i], locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix (stops + depot).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate listed first. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 3.0),
        ]
    }

    #[test]
    fn test_from_locations() {
        let dm = DistanceMatrix::from_locations(&sample_locations());
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 0), 0.0);
        assert!((dm.get(0, 1) - 111.19).abs() < 0.01);
        assert!((dm.get(1, 2) - 2.0 * dm.get(0, 1)).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_locations(&sample_locations());
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_locations(&sample_locations());
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_keeps_first() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 5.0);
        dm.set(0, 2, 5.0);
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
    }
}
