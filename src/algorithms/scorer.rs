use std::collections::BTreeSet;

use crate::models::{Trip, Value, ValueIndex};

/// A trip together with the distinct values it collects, sorted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoredTrip {
    pub trip: Trip,
    pub values: Vec<Value>,
}

/// Union of the values offered at every stop of a trip, in sorted order
pub fn collected_values<'a>(trip: &Trip, index: &'a ValueIndex) -> BTreeSet<&'a Value> {
    trip.stops
        .iter()
        .flat_map(|id| index.values_at(*id))
        .collect()
}

/// Selects the candidate collecting the most distinct values.
///
/// Only a strictly larger collection replaces the current best, so ties keep the
/// candidate that came first. No candidates gives an empty trip with no values.
pub fn score<'a, I>(candidates: I, index: &ValueIndex) -> ScoredTrip
where
    I: IntoIterator<Item = &'a Trip>,
{
    let mut best: Option<(&Trip, BTreeSet<&Value>)> = None;

    for trip in candidates {
        let values = collected_values(trip, index);
        let is_better = match &best {
            Some((_, best_values)) => values.len() > best_values.len(),
            None => true,
        };
        if is_better {
            best = Some((trip, values));
        }
    }

    match best {
        Some((trip, values)) => ScoredTrip {
            trip: trip.clone(),
            values: values.into_iter().cloned().collect(),
        },
        None => ScoredTrip::default(),
    }
}
