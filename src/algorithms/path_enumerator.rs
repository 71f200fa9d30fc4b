use crate::algorithms::neighbors::SearchSpace;
use crate::models::{Km, Trip, ORIGIN_ID};

/// A partial route on the search stack
#[derive(Debug, Clone)]
struct SearchState {
    /// Matrix index of the location being visited
    current: usize,

    /// Matrix indices visited before `current`
    path: Vec<usize>,

    /// Distance traveled to reach `current`
    traveled: Km,
}

/// Counters describing the work done by an enumerator so far
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    /// States whose neighbors were expanded
    pub expansions: usize,

    /// States discarded because they exceeded the budget
    pub over_budget: usize,

    /// States discarded because they revisit a location
    pub revisits: usize,

    /// Forced early returns to the origin generated
    pub forced_returns: usize,

    /// Largest number of states generated by a single expansion
    pub max_branching: usize,

    /// Trips yielded
    pub trips: usize,
}

/// Budget-aware depth-first enumerator of round trips from the origin.
///
/// Trips are produced lazily: every call to `next` resumes the search from
/// an explicit stack owned by the enumerator, so a consumer may stop pulling
/// at any point and simply drop it.
///
/// Per popped state `(current, path, traveled)`:
/// - states beyond the budget are pruned;
/// - reaching the origin with more than the floor (half of the budget) spent yields a trip,
///   and the state is still expanded afterwards;
/// - revisiting a non-origin location ends the branch;
/// - each of the nearest neighbors of `current` becomes a new state if it can be
///   visited with enough budget left to fly home from it, otherwise the branch is
///   sent straight home when that is still affordable.
///
/// Neighbors are pushed nearest first, so the farthest one is explored first.
#[derive(Debug)]
pub struct PathEnumerator<'a> {
    space: &'a SearchSpace,
    origin: usize,
    budget: Km,
    /// Distance a trip must exceed to be yielded
    floor: Km,
    stack: Vec<SearchState>,
    stats: SearchStats,
    exhausted: bool,
}

impl<'a> PathEnumerator<'a> {
    /// Starts a fresh search from the origin with the given distance budget.
    /// Only trips longer than half of the budget are yielded
    pub fn new(space: &'a SearchSpace, budget: Km) -> Self {
        Self::with_floor(space, budget, budget / 2.0)
    }

    /// Starts a fresh search yielding trips longer than `floor`
    pub fn with_floor(space: &'a SearchSpace, budget: Km, floor: Km) -> Self {
        let origin = space.matrix().index_of(ORIGIN_ID);

        let stack = origin
            .map(|origin| {
                vec![SearchState {
                    current: origin,
                    path: Vec::new(),
                    traveled: 0.0,
                }]
            })
            .unwrap_or_default();

        Self {
            space,
            origin: origin.unwrap_or_default(),
            budget,
            floor,
            stack,
            stats: SearchStats::default(),
            exhausted: false,
        }
    }

    /// Work counters collected so far
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of states still waiting on the stack
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    fn to_trip(&self, state: &SearchState) -> Trip {
        let ids = self.space.matrix().ids();
        state
            .path
            .iter()
            .chain(std::iter::once(&state.current))
            .map(|index| ids[*index])
            .collect::<Vec<_>>()
            .into()
    }

    /// Pushes the successors of a state in neighbor order
    fn expand(&mut self, state: SearchState) {
        let space = self.space;
        let matrix = space.matrix();
        let origin = self.origin;

        let SearchState {
            current,
            mut path,
            traveled,
        } = state;
        path.push(current);

        let return_now = traveled + matrix.distance_at(current, origin);
        let neighbors = space.neighbors_of(current);

        let mut children: Vec<SearchState> = Vec::with_capacity(neighbors.len());
        let mut forced_slot: Option<usize> = None;

        for &nbr in neighbors {
            let extended = traveled + matrix.distance_at(current, nbr);
            let return_from_nbr = matrix.distance_at(nbr, origin);

            if extended + return_from_nbr > self.budget {
                // going home from the origin itself is a zero-length loop
                if return_now > self.budget || current == origin {
                    continue;
                }
                // every forced return of this state is the same state: keep only the last one
                if let Some(slot) = forced_slot.take() {
                    children.remove(slot);
                }
                forced_slot = Some(children.len());
                children.push(SearchState {
                    current: origin,
                    path: path.clone(),
                    traveled: return_now,
                });
            } else {
                children.push(SearchState {
                    current: nbr,
                    path: path.clone(),
                    traveled: extended,
                });
            }
        }

        self.stats.expansions += 1;
        self.stats.forced_returns += forced_slot.iter().count();
        self.stats.max_branching = self.stats.max_branching.max(children.len());

        self.stack.extend(children);
    }
}

impl Iterator for PathEnumerator<'_> {
    type Item = Trip;

    fn next(&mut self) -> Option<Trip> {
        while let Some(state) = self.stack.pop() {
            if state.traveled > self.budget {
                self.stats.over_budget += 1;
                continue;
            }

            let completed = if state.current == self.origin && state.traveled > self.floor {
                Some(self.to_trip(&state))
            } else {
                None
            };

            if state.current != self.origin && state.path.contains(&state.current) {
                self.stats.revisits += 1;
                continue;
            }

            self.expand(state);

            if let Some(trip) = completed {
                self.stats.trips += 1;
                return Some(trip);
            }
        }

        if !self.exhausted {
            self.exhausted = true;
            log::debug!("search space exhausted: {:?}", self.stats);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, LocationId, LocationSet};
    use std::collections::HashSet;

    /// Locations on the equator, `degrees` east of the origin
    fn create_line(degrees: &[(LocationId, f64)]) -> LocationSet {
        LocationSet::from_records(
            0.0,
            0.0,
            degrees
                .iter()
                .map(|(id, lon)| Location::new(*id, format!("L{}", id), 0.0, *lon)),
        )
    }

    fn check_trip(trip: &Trip, locations: &LocationSet, budget: Km) {
        assert!(trip.is_round_trip(), "not a round trip: {:?}", trip);

        let total = trip.total_distance(locations);
        assert!(total <= budget + 1e-6, "{:?} travels {} > {}", trip, total, budget);
        assert!(total > budget / 2.0 - 1e-6, "{:?} travels only {}", trip, total);

        let mut seen = HashSet::new();
        for id in trip.visited() {
            assert!(seen.insert(id), "{:?} repeats {}", trip, id);
        }
    }

    #[test]
    fn test_origin_only_yields_nothing() {
        let locations = LocationSet::new(0.0, 0.0);
        let space = SearchSpace::new(&locations, 20);

        let trips: Vec<Trip> = PathEnumerator::new(&space, 2000.0).collect();
        assert!(trips.is_empty());
    }

    #[test]
    fn test_single_location() {
        // one degree on the equator is about 111 km
        let locations = create_line(&[(1, 1.0)]);
        let space = SearchSpace::new(&locations, 20);

        let trips: Vec<Trip> = PathEnumerator::new(&space, 300.0).collect();

        assert_eq!(trips, vec![Trip::new(vec![0, 1, 0])]);
    }

    #[test]
    fn test_half_budget_floor() {
        // round trip of about 222 km is below half of 500 km
        let locations = create_line(&[(1, 1.0)]);
        let space = SearchSpace::new(&locations, 20);

        assert_eq!(PathEnumerator::new(&space, 500.0).count(), 0);
    }

    #[test]
    fn test_forced_return() {
        // 2 is affordable to reach but not to come back from, so 1 turns home early
        let locations = create_line(&[(1, 1.0), (2, 3.0)]);
        let space = SearchSpace::new(&locations, 20);
        let budget = 300.0;

        let mut enumerator = PathEnumerator::new(&space, budget);
        let trips: Vec<Trip> = enumerator.by_ref().collect();

        assert!(trips.contains(&Trip::new(vec![0, 1, 0])));
        for trip in &trips {
            check_trip(trip, &locations, budget);
            assert!(!trip.stops.contains(&2));
        }
        assert!(enumerator.stats().forced_returns > 0);
    }

    #[test]
    fn test_farthest_neighbor_first() {
        let locations = create_line(&[(1, 1.0), (2, 2.0)]);
        let space = SearchSpace::new(&locations, 20);

        let first = PathEnumerator::new(&space, 1000.0).next();

        assert_eq!(first.map(|trip| trip.stops[1]), Some(2));
    }

    #[test]
    fn test_properties_on_grid() {
        let mut records = Vec::new();
        for row in 0..4 {
            for col in 0..4 {
                let id = (row * 4 + col + 1) as LocationId;
                records.push(Location::new(id, "grid", row as f64 * 0.7, col as f64 * 0.9 - 1.0));
            }
        }
        let locations = LocationSet::from_records(0.3, 0.1, records);
        let space = SearchSpace::new(&locations, 4);
        let budget = 500.0;

        let trips: Vec<Trip> = PathEnumerator::new(&space, budget).take(500).collect();

        assert!(!trips.is_empty());
        for trip in &trips {
            check_trip(trip, &locations, budget);
        }
    }

    #[test]
    fn test_custom_floor() {
        let locations = create_line(&[(1, 1.0)]);
        let space = SearchSpace::new(&locations, 20);

        let trips: Vec<Trip> = PathEnumerator::with_floor(&space, 500.0, 0.0).collect();

        assert_eq!(trips, vec![Trip::new(vec![0, 1, 0])]);
    }

    #[test]
    fn test_zero_budget() {
        let locations = create_line(&[(1, 1.0), (2, 2.0)]);
        let space = SearchSpace::new(&locations, 20);

        let mut enumerator = PathEnumerator::new(&space, 0.0);
        assert_eq!(enumerator.next(), None);
        assert_eq!(enumerator.pending(), 0);
    }

    #[test]
    fn test_fanout_one_is_linear() {
        // each stop is closer to the next one outward than to the previous one
        let km = [100.0, 150.0, 190.0, 220.0, 240.0];
        let line: Vec<(LocationId, f64)> = km
            .iter()
            .enumerate()
            .map(|(i, d)| (i as LocationId + 1, d / 111.195))
            .collect();
        let locations = create_line(&line);
        let space = SearchSpace::new(&locations, 1);

        assert_eq!(space.fanout(), 1);
        for index in 0..space.matrix().size() {
            assert!(space.neighbors_of(index).len() <= 1);
        }
        assert_eq!(space.neighbor_ids(0), vec![1]);
        assert_eq!(space.neighbor_ids(4), vec![5]);
        assert_eq!(space.neighbor_ids(5), vec![4]);

        // 5 is out of reach from 4, so the chain is sent home from there
        let mut enumerator = PathEnumerator::new(&space, 450.0);
        let trips: Vec<Trip> = enumerator.by_ref().collect();

        assert_eq!(trips, vec![Trip::new(vec![0, 1, 2, 3, 4, 0])]);
        check_trip(&trips[0], &locations, 450.0);

        let stats = enumerator.stats();
        assert_eq!(stats.expansions, 6);
        assert_eq!(stats.forced_returns, 1);
        assert!(stats.max_branching <= 1);
    }

    #[test]
    fn test_origin_is_yielded_and_expanded() {
        let locations = create_line(&[(1, 1.0), (2, -1.0)]);
        let space = SearchSpace::new(&locations, 20);
        let budget = 500.0;

        let trips: Vec<Trip> = PathEnumerator::new(&space, budget).collect();
        for trip in &trips {
            check_trip(trip, &locations, budget);
        }

        let mut distinct: Vec<Trip> = Vec::new();
        for trip in trips {
            if !distinct.contains(&trip) {
                distinct.push(trip);
            }
        }

        // the origin is passed through on the way to the second loop
        assert_eq!(
            distinct,
            vec![
                Trip::new(vec![0, 2, 1, 0]),
                Trip::new(vec![0, 2, 0, 1, 0]),
                Trip::new(vec![0, 1, 2, 0]),
                Trip::new(vec![0, 1, 0, 2, 0]),
            ]
        );
    }

    #[test]
    fn test_early_abandon() {
        let locations = create_line(&[(1, 1.0), (2, 2.0), (3, 3.0)]);
        let space = SearchSpace::new(&locations, 20);

        let mut enumerator = PathEnumerator::new(&space, 1000.0);
        let first = enumerator.next();
        assert!(first.is_some());
        assert!(enumerator.pending() > 0);
        drop(enumerator);

        // a new enumerator starts over
        let first_again = PathEnumerator::new(&space, 1000.0).next();
        assert_eq!(first_again, first);
    }
}
