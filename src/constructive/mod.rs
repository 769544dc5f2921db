//! Constructive heuristics for ordering the stops of one tour.
//!
//! - [`NearestNeighborOptimizer`] — greedy nearest-unvisited walk, O(n²)
//! - [`ClarkeWrightOptimizer`] — Clarke-Wright savings merge (1964), O(n² log n)

mod clarke_wright;
mod nearest_neighbor;

pub use clarke_wright::ClarkeWrightOptimizer;
pub use nearest_neighbor::NearestNeighborOptimizer;
