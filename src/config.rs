// Planner configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::algorithms::neighbors::DEFAULT_FANOUT;
use crate::models::Km;
use crate::{Error, Result};

pub const DEFAULT_DISTANCE_BUDGET_KM: Km = 2000.0;
pub const DEFAULT_MAX_CANDIDATES: usize = 50;

/// Options of a planning run. Every field falls back to its default when
/// missing from a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Maximum total distance of a round trip
    pub distance_budget_km: Km,

    /// Number of nearest neighbors considered at each search step
    pub neighbor_fanout_k: usize,

    /// Number of distinct candidate trips gathered before scoring
    pub max_candidates: usize,

    /// Accept trips spending no more than half of the budget when no longer trip exists
    pub short_trip_fallback: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            distance_budget_km: DEFAULT_DISTANCE_BUDGET_KM,
            neighbor_fanout_k: DEFAULT_FANOUT,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            short_trip_fallback: true,
        }
    }
}

impl PlannerConfig {
    /// Parses a config from JSON and validates it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    pub fn with_budget(mut self, distance_budget_km: Km) -> Self {
        self.distance_budget_km = distance_budget_km;
        self
    }

    pub fn with_fanout(mut self, neighbor_fanout_k: usize) -> Self {
        self.neighbor_fanout_k = neighbor_fanout_k;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_short_trip_fallback(mut self, short_trip_fallback: bool) -> Self {
        self.short_trip_fallback = short_trip_fallback;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.distance_budget_km.is_finite() || self.distance_budget_km < 0.0 {
            return Err(Error::invalid_config(format!(
                "distance budget must be a non-negative number of km, got {}",
                self.distance_budget_km
            )));
        }
        if self.neighbor_fanout_k == 0 {
            return Err(Error::invalid_config("neighbor fanout must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();

        assert_eq!(config.distance_budget_km, 2000.0);
        assert_eq!(config.neighbor_fanout_k, 20);
        assert_eq!(config.max_candidates, 50);
        assert!(config.short_trip_fallback);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = PlannerConfig::from_json(r#"{ "distance_budget_km": 750.5 }"#).unwrap();

        assert_eq!(config.distance_budget_km, 750.5);
        assert_eq!(config.neighbor_fanout_k, 20);
        assert_eq!(config.max_candidates, 50);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            PlannerConfig::from_json(r#"{ "distance_budget_km": -1.0 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            PlannerConfig::from_json(r#"{ "neighbor_fanout_k": 0 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            PlannerConfig::from_json(r#"{ "fanout": 3 }"#),
            Err(Error::Json(_))
        ));
        assert!(PlannerConfig::default().with_budget(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = PlannerConfig::default()
            .with_budget(0.0)
            .with_fanout(1)
            .with_max_candidates(3)
            .with_short_trip_fallback(false);

        assert_eq!(config.distance_budget_km, 0.0);
        assert_eq!(config.neighbor_fanout_k, 1);
        assert_eq!(config.max_candidates, 3);
        assert!(!config.short_trip_fallback);
        assert!(config.validate().is_ok());
    }
}
