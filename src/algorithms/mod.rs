pub mod collector;
pub mod neighbors;
pub mod path_enumerator;
pub mod planner;
pub mod scorer;

// Common algorithm traits
use crate::algorithms::collector::CandidateSet;
use crate::models::{Km, PlannedTrip, Trip, ValueIndex};

/// Trait for planners of value-collecting round trips
pub trait TripPlanner {
    /// Gather the distinct candidate trips considered for selection
    fn candidates(&self) -> CandidateSet;

    /// Plan the round trip collecting the most distinct values
    fn plan(&self, values: &ValueIndex) -> PlannedTrip;

    /// Calculate the total distance of a trip in kilometers
    fn trip_distance(&self, trip: &Trip) -> Km;
}
