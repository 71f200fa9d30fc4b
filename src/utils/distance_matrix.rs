use rayon::prelude::*;
use std::collections::HashMap;

use crate::models::{Km, LocationId, LocationSet};

/// Dense matrix of pairwise great-circle distances over a location set
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    /// Location ids sorted ascending; position in this vector is the matrix index
    ids: Vec<LocationId>,
    index_of: HashMap<LocationId, usize>,
    distances: Vec<Km>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances. Rows are processed in parallel
    pub fn new(locations: &LocationSet) -> Self {
        let ids = locations.sorted_ids();
        let index_of: HashMap<LocationId, usize> =
            ids.iter().enumerate().map(|(idx, id)| (*id, idx)).collect();

        let points: Vec<_> = ids.iter().filter_map(|id| locations.get(*id)).collect();
        let size = points.len();

        let rows: Vec<Vec<Km>> = points
            .par_iter()
            .map(|from| points.iter().map(|to| from.distance_to(to)).collect())
            .collect();
        let distances = rows.concat();

        log::debug!("computed {} pairwise distances", size * size);

        Self {
            ids,
            index_of,
            distances,
        }
    }

    /// Number of locations covered by the matrix
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    /// Location ids in matrix order (ascending)
    pub fn ids(&self) -> &[LocationId] {
        &self.ids
    }

    /// Matrix index of a location id
    pub fn index_of(&self, id: LocationId) -> Option<usize> {
        self.index_of.get(&id).cloned()
    }

    /// Distance between two matrix indices
    pub fn distance_at(&self, from: usize, to: usize) -> Km {
        self.distances[from * self.ids.len() + to]
    }

    /// Distance between two location ids; None if either id is unknown
    pub fn distance(&self, from: LocationId, to: LocationId) -> Option<Km> {
        Some(self.distance_at(self.index_of(from)?, self.index_of(to)?))
    }

    /// Distances from one location to every location, in matrix order
    pub fn row(&self, from: usize) -> &[Km] {
        let size = self.ids.len();
        &self.distances[from * size..(from + 1) * size]
    }
}
