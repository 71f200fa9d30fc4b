use std::collections::HashSet;

use crate::models::Trip;

/// Distinct candidate trips in the order they were first produced
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    trips: Vec<Trip>,
    seen: HashSet<Trip>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trip unless an identical one is already present
    pub fn insert(&mut self, trip: Trip) -> bool {
        if self.seen.contains(&trip) {
            return false;
        }
        self.seen.insert(trip.clone());
        self.trips.push(trip);
        true
    }

    pub fn contains(&self, trip: &Trip) -> bool {
        self.seen.contains(trip)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Iterates over trips in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    pub fn into_trips(self) -> Vec<Trip> {
        self.trips
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pulls trips until `max_count` distinct ones are gathered or the source runs dry.
/// Running dry first is a normal outcome and simply gives a smaller set.
pub fn collect_candidates<I>(trips: I, max_count: usize) -> CandidateSet
where
    I: IntoIterator<Item = Trip>,
{
    let mut candidates = CandidateSet::new();
    if max_count == 0 {
        return candidates;
    }

    let mut pulled = 0_usize;
    for trip in trips {
        pulled += 1;
        candidates.insert(trip);
        if candidates.len() >= max_count {
            break;
        }
    }

    if candidates.len() < max_count {
        log::info!(
            "search exhausted with {} distinct candidates of {} requested",
            candidates.len(),
            max_count
        );
    }
    log::debug!("pulled {} trips for {} candidates", pulled, candidates.len());

    candidates
}
