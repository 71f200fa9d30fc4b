// Loading of the brewery dump (breweries, geocodes and beers) into the searching map

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::models::{Location, LocationId, LocationSet, ValueIndex, ORIGIN_ID};
use crate::{Error, Result};

pub const BREWERIES_FILE: &str = "breweries.csv";
pub const GEOCODES_FILE: &str = "geocodes.csv";
pub const BEERS_FILE: &str = "beers.csv";

/// Row of `breweries.csv`; other columns are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreweryRecord {
    pub id: LocationId,
    pub name: String,
}

/// Row of `geocodes.csv`; other columns are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeRecord {
    pub brewery_id: LocationId,
    pub latitude: f64,
    pub longitude: f64,
}

/// Row of `beers.csv`; other columns are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BeerRecord {
    pub brewery_id: LocationId,
    pub name: String,
}

fn read_csv_entries<T, R: Read>(reader: R) -> Result<Vec<T>>
where
    for<'de> T: Deserialize<'de>,
{
    let mut reader = csv::Reader::from_reader(BufReader::new(reader));
    let mut entries = vec![];

    for entry in reader.deserialize() {
        entries.push(entry?);
    }

    Ok(entries)
}

pub fn read_breweries<R: Read>(reader: R) -> Result<Vec<BreweryRecord>> {
    read_csv_entries(reader)
}

pub fn read_geocodes<R: Read>(reader: R) -> Result<Vec<GeocodeRecord>> {
    read_csv_entries(reader)
}

pub fn read_beers<R: Read>(reader: R) -> Result<Vec<BeerRecord>> {
    read_csv_entries(reader)
}

/// Rejects coordinates outside of latitude [-90, 90] and longitude [-180, 180]
pub fn validate_coordinates(id: LocationId, latitude: f64, longitude: f64) -> Result<()> {
    let location = Location::new(id, "", latitude, longitude);
    if location.has_valid_coordinates() {
        Ok(())
    } else {
        Err(Error::InvalidCoordinate {
            id,
            latitude,
            longitude,
        })
    }
}

/// Joins breweries with their geocodes into a location set around the origin.
///
/// Duplicate ids keep their first row. Breweries without a geocode and a brewery
/// claiming the origin id are skipped. Any invalid coordinate fails the whole load.
pub fn build_location_set(
    origin_latitude: f64,
    origin_longitude: f64,
    breweries: Vec<BreweryRecord>,
    geocodes: Vec<GeocodeRecord>,
) -> Result<LocationSet> {
    validate_coordinates(ORIGIN_ID, origin_latitude, origin_longitude)?;

    let mut coordinates: HashMap<LocationId, (f64, f64)> = HashMap::new();
    for geocode in geocodes {
        coordinates
            .entry(geocode.brewery_id)
            .or_insert((geocode.latitude, geocode.longitude));
    }

    let mut locations = LocationSet::new(origin_latitude, origin_longitude);
    let mut missing_geocode = 0;
    let mut duplicates = 0;

    for brewery in breweries {
        if brewery.id == ORIGIN_ID {
            log::warn!("skipping brewery '{}': id 0 is reserved for home", brewery.name);
            continue;
        }
        let Some(&(latitude, longitude)) = coordinates.get(&brewery.id) else {
            missing_geocode += 1;
            continue;
        };
        validate_coordinates(brewery.id, latitude, longitude)?;

        if !locations.add_location(Location::new(brewery.id, brewery.name, latitude, longitude)) {
            duplicates += 1;
        }
    }

    if missing_geocode > 0 {
        log::warn!("skipped {} breweries without geocode", missing_geocode);
    }
    if duplicates > 0 {
        log::debug!("dropped {} duplicate brewery rows", duplicates);
    }

    Ok(locations)
}

/// Builds the index of distinct beer names per brewery
pub fn build_value_index(beers: Vec<BeerRecord>) -> ValueIndex {
    beers
        .into_iter()
        .map(|beer| (beer.brewery_id, beer.name))
        .collect()
}

fn open_file(data_dir: &Path, file_name: &str) -> Result<File> {
    let path = data_dir.join(file_name);
    File::open(&path).map_err(|err| {
        Error::invalid_input(format!("cannot open '{}': {}", path.display(), err))
    })
}

/// Loads the searching map from the dump files in `data_dir`
pub fn init_map<P: AsRef<Path>>(
    data_dir: P,
    origin_latitude: f64,
    origin_longitude: f64,
) -> Result<(LocationSet, ValueIndex)> {
    let data_dir = data_dir.as_ref();
    log::info!("loading brewery data from {}", data_dir.display());

    let breweries = read_breweries(open_file(data_dir, BREWERIES_FILE)?)?;
    let geocodes = read_geocodes(open_file(data_dir, GEOCODES_FILE)?)?;
    let beers = read_beers(open_file(data_dir, BEERS_FILE)?)?;
    log::info!(
        "loaded {} breweries, {} geocodes and {} beers",
        breweries.len(),
        geocodes.len(),
        beers.len()
    );

    let locations = build_location_set(origin_latitude, origin_longitude, breweries, geocodes)?;
    let values = build_value_index(beers);
    log::info!(
        "searching map has {} locations and {} distinct beers by brewery",
        locations.len(),
        values.entry_count()
    );

    Ok((locations, values))
}
