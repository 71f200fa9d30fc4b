use crate::algorithms::collector::{collect_candidates, CandidateSet};
use crate::algorithms::neighbors::SearchSpace;
use crate::algorithms::path_enumerator::PathEnumerator;
use crate::algorithms::scorer::score;
use crate::algorithms::TripPlanner;
use crate::config::PlannerConfig;
use crate::models::{Km, LocationSet, PlannedTrip, Trip, ValueIndex};

/// Planner running the budgeted depth-first search over nearest neighbors
#[derive(Debug, Clone)]
pub struct BudgetedDfsPlanner {
    locations: LocationSet,
    config: PlannerConfig,
    space: SearchSpace,
}

impl BudgetedDfsPlanner {
    /// Creates a planner and precomputes distances and neighbor lists
    pub fn new(locations: LocationSet, config: PlannerConfig) -> Self {
        log::info!(
            "preparing search over {} locations (budget {} km, fanout {})",
            locations.len(),
            config.distance_budget_km,
            config.neighbor_fanout_k
        );
        let space = SearchSpace::new(&locations, config.neighbor_fanout_k);

        Self {
            locations,
            config,
            space,
        }
    }

    pub fn locations(&self) -> &LocationSet {
        &self.locations
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn search_space(&self) -> &SearchSpace {
        &self.space
    }

    /// Starts a fresh lazy enumeration of round trips
    pub fn enumerate(&self) -> PathEnumerator<'_> {
        PathEnumerator::new(&self.space, self.config.distance_budget_km)
    }
}

impl TripPlanner for BudgetedDfsPlanner {
    fn candidates(&self) -> CandidateSet {
        let max_count = self.config.max_candidates;
        let candidates = collect_candidates(self.enumerate(), max_count);
        if !candidates.is_empty() || !self.config.short_trip_fallback || max_count == 0 {
            return candidates;
        }

        log::info!("no trip spends more than half of the budget, accepting shorter trips");
        let enumerator =
            PathEnumerator::with_floor(&self.space, self.config.distance_budget_km, 0.0);
        collect_candidates(enumerator, max_count)
    }

    fn plan(&self, values: &ValueIndex) -> PlannedTrip {
        let candidates = self.candidates();
        log::info!("scoring {} candidate trips", candidates.len());

        let scored = score(&candidates, values);
        if scored.trip.is_empty() {
            log::warn!("no round trip fits the budget of {} km", self.config.distance_budget_km);
            return PlannedTrip::empty();
        }

        let planned = PlannedTrip::new(scored.trip, scored.values, &self.locations);
        log::info!(
            "best trip visits {} locations over {:.1} km and collects {} values",
            planned.trip.visited_count(),
            planned.total_distance,
            planned.values.len()
        );

        planned
    }

    fn trip_distance(&self, trip: &Trip) -> Km {
        let matrix = self.space.matrix();
        trip.stops
            .windows(2)
            .filter_map(|leg| matrix.distance(leg[0], leg[1]))
            .sum()
    }
}
