//! Fallback wrapper for externally computed orderings.

use std::collections::HashMap;

use tracing::warn;

use super::TourOptimizer;
use crate::constructive::NearestNeighborOptimizer;
use crate::models::{Depot, Stop, VehicleProfile};

/// An ordering source that lives outside this crate and may fail, such as
/// a remote planning service.
pub trait ExternalOptimizer {
    /// Failure reported by the external source.
    type Error: std::error::Error;

    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Proposes the stop IDs in visit order.
    fn propose(
        &self,
        depot: &Depot,
        stops: &[Stop],
        vehicle: Option<&VehicleProfile>,
    ) -> Result<Vec<u64>, Self::Error>;
}

/// Uses an [`ExternalOptimizer`] when it answers with a valid ordering and
/// nearest neighbor otherwise.
///
/// A proposal is valid only if it names every input stop exactly once.
#[derive(Debug, Clone)]
pub struct FallbackOptimizer<E> {
    external: E,
    fallback: NearestNeighborOptimizer,
}

impl<E: ExternalOptimizer> FallbackOptimizer<E> {
    /// Wraps `external` with a nearest-neighbor fallback.
    pub fn new(external: E) -> Self {
        Self {
            external,
            fallback: NearestNeighborOptimizer::new(),
        }
    }

    /// The wrapped external optimizer.
    pub fn external(&self) -> &E {
        &self.external
    }
}

impl<E: ExternalOptimizer> TourOptimizer for FallbackOptimizer<E> {
    fn algorithm_name(&self) -> &'static str {
        self.external.name()
    }

    fn visit_order(
        &self,
        depot: &Depot,
        stops: &[Stop],
        vehicle: Option<&VehicleProfile>,
    ) -> Vec<usize> {
        if stops.is_empty() {
            return Vec::new();
        }
        match self.external.propose(depot, stops, vehicle) {
            Ok(ids) => match positions_of(stops, &ids) {
                Some(order) => order,
                None => {
                    warn!(
                        optimizer = self.external.name(),
                        proposed = ids.len(),
                        stops = stops.len(),
                        "proposal is not a permutation of the stops, falling back to nearest neighbor"
                    );
                    self.fallback.visit_order(depot, stops, vehicle)
                }
            },
            Err(err) => {
                warn!(
                    optimizer = self.external.name(),
                    error = %err,
                    "external optimizer failed, falling back to nearest neighbor"
                );
                self.fallback.visit_order(depot, stops, vehicle)
            }
        }
    }
}

/// Maps proposed IDs to stop positions; `None` unless it is a permutation.
fn positions_of(stops: &[Stop], ids: &[u64]) -> Option<Vec<usize>> {
    if ids.len() != stops.len() {
        return None;
    }
    let index: HashMap<u64, usize> = stops.iter().enumerate().map(|(i, s)| (s.id(), i)).collect();
    let mut seen = vec![false; stops.len()];
    let mut order = Vec::with_capacity(ids.len());
    for id in ids {
        let &pos = index.get(id)?;
        if std::mem::replace(&mut seen[pos], true) {
            return None;
        }
        order.push(pos);
    }
    Some(order)
}
