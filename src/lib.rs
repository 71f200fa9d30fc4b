// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod utils;

// Re-exports for convenience
pub use algorithms::planner::BudgetedDfsPlanner;
pub use algorithms::TripPlanner;
pub use config::PlannerConfig;
pub use error::{Error, Result};
pub use models::{Location, LocationSet, PlannedTrip, Trip, ValueIndex};
