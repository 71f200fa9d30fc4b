// Trip model: an origin-to-origin sequence of visited locations

use crate::models::{Km, LocationId, LocationSet, ORIGIN_ID};
use serde::Serialize;

/// Ordered sequence of location identifiers starting and ending at the origin
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Trip {
    pub stops: Vec<LocationId>,
}

impl Trip {
    /// Creates a trip from the given stops
    pub fn new(stops: Vec<LocationId>) -> Self {
        Self { stops }
    }

    /// Creates a trip with no stops, used when no route is feasible
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Checks that the trip starts and ends at the origin
    pub fn is_round_trip(&self) -> bool {
        self.stops.len() >= 2
            && self.stops.first() == Some(&ORIGIN_ID)
            && self.stops.last() == Some(&ORIGIN_ID)
    }

    /// Non-origin stops in visiting order
    pub fn visited(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.stops.iter().cloned().filter(|id| *id != ORIGIN_ID)
    }

    /// Number of non-origin stops
    pub fn visited_count(&self) -> usize {
        self.visited().count()
    }

    /// Distance of every leg between consecutive stops.
    /// Unknown identifiers contribute nothing.
    pub fn leg_distances(&self, locations: &LocationSet) -> Vec<Km> {
        self.stops
            .windows(2)
            .map(|leg| match (locations.get(leg[0]), locations.get(leg[1])) {
                (Some(from), Some(to)) => from.distance_to(to),
                _ => 0.0,
            })
            .collect()
    }

    /// Total distance of the trip in kilometers
    pub fn total_distance(&self, locations: &LocationSet) -> Km {
        self.leg_distances(locations).iter().sum()
    }
}

impl From<Vec<LocationId>> for Trip {
    fn from(stops: Vec<LocationId>) -> Self {
        Self::new(stops)
    }
}
