use rayon::prelude::*;
use std::cmp::Ordering;

use crate::models::{Km, Location, LocationId, LocationSet};
use crate::utils::distance_matrix::DistanceMatrix;

/// Default number of nearest neighbors considered at each expansion step
pub const DEFAULT_FANOUT: usize = 20;

/// Ascending by distance, ties broken by ascending identifier
fn by_distance_then_id(a: &(LocationId, Km), b: &(LocationId, Km)) -> Ordering {
    a.1.total_cmp(&b.1).then(a.0.cmp(&b.0))
}

/// Keeps the k closest candidates, excluding `current`, in neighbor order
fn rank_neighbors<I>(current: LocationId, candidates: I, k: usize) -> Vec<(LocationId, Km)>
where
    I: IntoIterator<Item = (LocationId, Km)>,
{
    let mut ranked: Vec<(LocationId, Km)> = candidates
        .into_iter()
        .filter(|(id, _)| *id != current)
        .collect();

    ranked.sort_by(by_distance_then_id);
    ranked.truncate(k);
    ranked
}

/// Finds the k nearest other locations to `current`, nearest first.
/// Distances are recomputed on every call.
pub fn neighbors<'a>(current: &Location, all: &'a LocationSet, k: usize) -> Vec<&'a Location> {
    let ranked = rank_neighbors(
        current.id,
        all.iter().map(|location| (location.id, current.distance_to(location))),
        k,
    );

    ranked.into_iter().filter_map(|(id, _)| all.get(id)).collect()
}

/// Precomputed distances and nearest-k neighbor lists for a location set.
/// Gives the same neighbors, in the same order, as [`neighbors`].
#[derive(Debug, Clone)]
pub struct SearchSpace {
    matrix: DistanceMatrix,
    fanout: usize,
    /// Per matrix index: neighbor matrix indices, nearest first
    neighbor_lists: Vec<Vec<usize>>,
}

impl SearchSpace {
    /// Builds the distance matrix and every neighbor list up front
    pub fn new(locations: &LocationSet, fanout: usize) -> Self {
        let matrix = DistanceMatrix::new(locations);
        let ids = matrix.ids().to_vec();

        let neighbor_lists: Vec<Vec<usize>> = (0..matrix.size())
            .into_par_iter()
            .map(|from| {
                let row = matrix.row(from);
                rank_neighbors(ids[from], ids.iter().cloned().zip(row.iter().cloned()), fanout)
                    .into_iter()
                    .filter_map(|(id, _)| matrix.index_of(id))
                    .collect::<Vec<usize>>()
            })
            .collect();

        Self {
            matrix,
            fanout,
            neighbor_lists,
        }
    }

    /// Number of neighbors kept per location
    pub fn fanout(&self) -> usize {
        self.fanout
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Neighbor indices of a location index, nearest first
    pub fn neighbors_of(&self, index: usize) -> &[usize] {
        &self.neighbor_lists[index]
    }

    /// Neighbor identifiers of a location, nearest first
    pub fn neighbor_ids(&self, id: LocationId) -> Vec<LocationId> {
        self.matrix
            .index_of(id)
            .map(|index| {
                self.neighbors_of(index)
                    .iter()
                    .map(|nbr| self.matrix.ids()[*nbr])
                    .collect()
            })
            .unwrap_or_default()
    }
}
