// Planned trip models: the selected trip and its collected values

use crate::models::{Km, Location, LocationId, LocationSet, Trip, Value};
use serde::Serialize;

/// Result of a planning run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlannedTrip {
    /// Winning trip, empty when no round trip fits the budget
    pub trip: Trip,

    /// Distinct values collected along the trip, sorted
    pub values: Vec<Value>,

    /// Total traveled distance in kilometers
    pub total_distance: Km,
}

/// One stop of a planned trip with its coordinates and the leg leading to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedStop {
    pub id: LocationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Distance from the previous stop, 0 for the first one
    pub leg_distance: Km,
}

impl PlannedTrip {
    /// Creates a planned trip, computing its total distance from the locations
    pub fn new(trip: Trip, values: Vec<Value>, locations: &LocationSet) -> Self {
        let total_distance = trip.total_distance(locations);
        Self {
            trip,
            values,
            total_distance,
        }
    }

    /// Creates the result reported when no feasible trip exists
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.trip.is_empty()
    }

    /// Expands trip identifiers into stops. Unknown identifiers are skipped
    pub fn itinerary(&self, locations: &LocationSet) -> Vec<PlannedStop> {
        let mut previous: Option<&Location> = None;
        let mut stops = Vec::with_capacity(self.trip.len());

        for id in &self.trip.stops {
            if let Some(location) = locations.get(*id) {
                let leg_distance = previous.map_or(0.0, |prev| prev.distance_to(location));
                stops.push(PlannedStop {
                    id: location.id,
                    name: location.name.clone(),
                    latitude: location.latitude,
                    longitude: location.longitude,
                    leg_distance,
                });
                previous = Some(location);
            }
        }

        stops
    }
}
