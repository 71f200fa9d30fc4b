// Location model representing a point of interest on the globe

use crate::models::{Km, LocationId, ORIGIN_ID, ORIGIN_NAME};
use crate::utils::distance::great_circle_distance;
use serde::Serialize;

/// Represents a named location with latitude/longitude coordinates in degrees
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Unique identifier, 0 is reserved for the origin
    pub id: LocationId,

    /// Display name
    pub name: String,

    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Creates a new location with the given id, name and coordinates
    pub fn new<S: Into<String>>(id: LocationId, name: S, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Creates the origin location at the given coordinates
    pub fn origin(latitude: f64, longitude: f64) -> Self {
        Self::new(ORIGIN_ID, ORIGIN_NAME, latitude, longitude)
    }

    /// Returns true if this location is the origin
    pub fn is_origin(&self) -> bool {
        self.id == ORIGIN_ID
    }

    /// Checks that the coordinates are finite and within the valid degree ranges
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another location in kilometers
    pub fn distance_to(&self, other: &Location) -> Km {
        great_circle_distance(self, other)
    }
}
