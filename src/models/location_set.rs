// Location set model holding every location of a run, keyed by identifier

use crate::models::{Location, LocationId, ORIGIN_ID};
use std::collections::HashMap;

/// Mapping from identifier to location; the origin (id 0) is always present
#[derive(Debug, Clone)]
pub struct LocationSet {
    locations: HashMap<LocationId, Location>,
}

impl LocationSet {
    /// Creates a location set containing only the origin at the given coordinates
    pub fn new(origin_latitude: f64, origin_longitude: f64) -> Self {
        let mut locations = HashMap::new();
        locations.insert(ORIGIN_ID, Location::origin(origin_latitude, origin_longitude));

        Self { locations }
    }

    /// Creates a location set from the origin coordinates and a list of records.
    /// Records repeating an already known identifier are dropped.
    pub fn from_records<I>(origin_latitude: f64, origin_longitude: f64, records: I) -> Self
    where
        I: IntoIterator<Item = Location>,
    {
        let mut set = Self::new(origin_latitude, origin_longitude);
        for location in records {
            set.add_location(location);
        }
        set
    }

    /// Adds a location. Returns false if the identifier is already taken,
    /// which also protects the origin from being replaced
    pub fn add_location(&mut self, location: Location) -> bool {
        if self.locations.contains_key(&location.id) {
            return false;
        }
        self.locations.insert(location.id, location);
        true
    }

    /// Gets a location by identifier
    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Checks whether the identifier is known
    pub fn contains(&self, id: LocationId) -> bool {
        self.locations.contains_key(&id)
    }

    /// Gets the origin location
    pub fn origin(&self) -> &Location {
        // the origin is inserted on construction and can never be replaced or removed
        &self.locations[&ORIGIN_ID]
    }

    /// Total number of locations, origin included
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// A set always holds the origin, so it is never empty
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterates over all locations in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Returns all identifiers sorted ascending
    pub fn sorted_ids(&self) -> Vec<LocationId> {
        let mut ids: Vec<LocationId> = self.locations.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contains_origin() {
        let set = LocationSet::new(10.0, 20.0);

        assert_eq!(set.len(), 1);
        assert!(set.contains(ORIGIN_ID));
        assert_eq!(set.origin().latitude, 10.0);
        assert_eq!(set.origin().longitude, 20.0);
    }

    #[test]
    fn test_first_record_wins() {
        let set = LocationSet::from_records(
            0.0,
            0.0,
            vec![
                Location::new(3, "First", 1.0, 1.0),
                Location::new(3, "Second", 2.0, 2.0),
                Location::new(0, "Not home", 5.0, 5.0),
            ],
        );

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(3).map(|l| l.name.as_str()), Some("First"));
        assert_eq!(set.origin().name, "Home");
    }

    #[test]
    fn test_sorted_ids() {
        let set = LocationSet::from_records(
            0.0,
            0.0,
            vec![
                Location::new(9, "c", 1.0, 1.0),
                Location::new(2, "a", 1.0, 1.0),
                Location::new(5, "b", 1.0, 1.0),
            ],
        );

        assert_eq!(set.sorted_ids(), vec![0, 2, 5, 9]);
    }
}
