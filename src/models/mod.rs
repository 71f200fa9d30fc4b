// Models module - exports all model types

mod location;
mod location_set;
mod planned_trip;
mod trip;
mod value_index;

// Re-export model types
pub use self::location::Location;
pub use self::location_set::LocationSet;
pub use self::planned_trip::{PlannedStop, PlannedTrip};
pub use self::trip::Trip;
pub use self::value_index::ValueIndex;

// Common type aliases for improved code readability
pub type LocationId = u32;
pub type Km = f64;
pub type Value = String;

/// Identifier reserved for the fixed origin of every trip
pub const ORIGIN_ID: LocationId = 0;

/// Display name of the origin location
pub const ORIGIN_NAME: &str = "Home";
