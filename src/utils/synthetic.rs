// Seeded synthetic datasets for demos, benchmarks and tests

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Location, LocationId, LocationSet, ValueIndex};

/// Parameters of a generated dataset
#[derive(Debug, Clone)]
pub struct SyntheticOptions {
    pub seed: u64,

    /// Number of non-origin locations
    pub locations: usize,

    /// Size of the value catalog shared by all locations
    pub catalog_size: usize,

    /// Maximum number of values offered by a single location
    pub max_values_per_location: usize,

    pub origin_latitude: f64,
    pub origin_longitude: f64,

    /// Half-width in degrees of the box around the origin where locations are scattered
    pub spread_degrees: f64,
}

impl Default for SyntheticOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            locations: 200,
            catalog_size: 120,
            max_values_per_location: 6,
            origin_latitude: 51.0,
            origin_longitude: 10.0,
            spread_degrees: 6.0,
        }
    }
}

/// Generates a location set and value index. The same options always give the same dataset
pub fn synthetic_dataset(options: &SyntheticOptions) -> (LocationSet, ValueIndex) {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut locations = LocationSet::new(options.origin_latitude, options.origin_longitude);
    let mut values = ValueIndex::new();

    let catalog: Vec<String> = (1..=options.catalog_size)
        .map(|n| format!("Value {:03}", n))
        .collect();

    for n in 1..=options.locations {
        let id = n as LocationId;
        let latitude = jitter(&mut rng, options.origin_latitude, options.spread_degrees)
            .clamp(-90.0, 90.0);
        let longitude = jitter(&mut rng, options.origin_longitude, options.spread_degrees)
            .clamp(-180.0, 180.0);

        locations.add_location(Location::new(id, format!("Location {}", id), latitude, longitude));

        if catalog.is_empty() || options.max_values_per_location == 0 {
            continue;
        }
        let offered = rng.gen_range(1..=options.max_values_per_location.min(catalog.len()));
        for value in catalog.choose_multiple(&mut rng, offered) {
            values.add_value(id, value.clone());
        }
    }

    (locations, values)
}

fn jitter(rng: &mut StdRng, center: f64, spread: f64) -> f64 {
    if spread <= 0.0 {
        return center;
    }
    center + rng.gen_range(-spread..spread)
}
