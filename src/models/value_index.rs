// Value index model: which collectible values are available at each location

use crate::models::{LocationId, Value};
use std::collections::HashMap;

/// Mapping from location identifier to the distinct values offered there
#[derive(Debug, Clone, Default)]
pub struct ValueIndex {
    values: HashMap<LocationId, Vec<Value>>,
}

impl ValueIndex {
    /// Creates a new empty index
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Adds a value to a location. Returns false if the location already offers it
    pub fn add_value<S: Into<Value>>(&mut self, location_id: LocationId, value: S) -> bool {
        let value = value.into();
        let entry = self.values.entry(location_id).or_insert_with(Vec::new);
        if entry.contains(&value) {
            return false;
        }
        entry.push(value);
        true
    }

    /// Gets the values offered at a location, empty if none are known
    pub fn values_at(&self, location_id: LocationId) -> &[Value] {
        self.values
            .get(&location_id)
            .map(|values| values.as_slice())
            .unwrap_or(&[])
    }

    /// Number of locations with at least one value
    pub fn location_count(&self) -> usize {
        self.values.len()
    }

    /// Total number of (location, value) pairs
    pub fn entry_count(&self) -> usize {
        self.values.values().map(|values| values.len()).sum()
    }
}

impl<S: Into<Value>> FromIterator<(LocationId, S)> for ValueIndex {
    fn from_iter<T: IntoIterator<Item = (LocationId, S)>>(iter: T) -> Self {
        let mut index = ValueIndex::new();
        for (location_id, value) in iter {
            index.add_value(location_id, value);
        }
        index
    }
}
