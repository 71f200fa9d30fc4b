// Human readable and JSON reports of a planned trip

use serde::Serialize;
use std::io::{self, Write};

use crate::models::{Km, LocationSet, PlannedStop, PlannedTrip, Value, ORIGIN_ID};
use crate::Result;

/// Writes the itinerary, the total distance and the collected values.
/// Leg distances are truncated to whole kilometers and the total sums the truncated legs.
pub fn write_report<W: Write>(
    out: &mut W,
    planned: &PlannedTrip,
    locations: &LocationSet,
) -> io::Result<()> {
    let stops = planned.itinerary(locations);
    writeln!(
        out,
        "You have {} breweries on your itinerary:",
        planned.trip.visited_count()
    )?;

    let mut total_distance: u64 = 0;
    for (position, stop) in stops.iter().enumerate() {
        let leg = stop.leg_distance as u64;
        if position == 0 {
            writeln!(
                out,
                "[HOME] >> latitude: {}, longitude: {}",
                stop.latitude, stop.longitude
            )?;
            continue;
        }

        total_distance += leg;
        if stop.id == ORIGIN_ID {
            writeln!(
                out,
                "[HOME] >> latitude: {}, longitude: {}, distance: {}km",
                stop.latitude, stop.longitude, leg
            )?;
        } else {
            writeln!(
                out,
                "[{}] {} >> latitude: {}, longitude: {}, distance: {}km",
                stop.id, stop.name, stop.latitude, stop.longitude, leg
            )?;
        }
    }

    if !stops.is_empty() {
        writeln!(out, "\nTotal distance of the journey is {}km", total_distance)?;
    }

    writeln!(out, "\n\nCollected {} beer types:", planned.values.len())?;
    for value in &planned.values {
        writeln!(out, "{}", value)?;
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    stops: Vec<PlannedStop>,
    total_distance_km: Km,
    values: &'a [Value],
}

/// Serializes the planned trip with full stop details as pretty JSON
pub fn write_json_report<W: Write>(
    out: W,
    planned: &PlannedTrip,
    locations: &LocationSet,
) -> Result<()> {
    let report = JsonReport {
        stops: planned.itinerary(locations),
        total_distance_km: planned.total_distance,
        values: &planned.values,
    };
    serde_json::to_writer_pretty(out, &report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Trip};

    fn create_test_plan() -> (PlannedTrip, LocationSet) {
        let locations = LocationSet::from_records(
            0.0,
            0.0,
            vec![Location::new(7, "Alpha Brewing", 0.0, 1.0)],
        );
        let planned = PlannedTrip::new(
            Trip::new(vec![0, 7, 0]),
            vec!["Dunkel".to_string(), "Helles".to_string()],
            &locations,
        );
        (planned, locations)
    }

    #[test]
    fn test_text_report() {
        let (planned, locations) = create_test_plan();
        let mut out = Vec::new();

        write_report(&mut out, &planned, &locations).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "\
You have 1 breweries on your itinerary:
[HOME] >> latitude: 0, longitude: 0
[7] Alpha Brewing >> latitude: 0, longitude: 1, distance: 111km
[HOME] >> latitude: 0, longitude: 0, distance: 111km

Total distance of the journey is 222km


Collected 2 beer types:
Dunkel
Helles
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_report() {
        let locations = LocationSet::new(0.0, 0.0);
        let mut out = Vec::new();

        write_report(&mut out, &PlannedTrip::empty(), &locations).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "You have 0 breweries on your itinerary:\n\n\nCollected 0 beer types:\n"
        );
    }

    #[test]
    fn test_json_report() {
        let (planned, locations) = create_test_plan();
        let mut out = Vec::new();

        write_json_report(&mut out, &planned, &locations).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["stops"].as_array().map(|s| s.len()), Some(3));
        assert_eq!(json["stops"][1]["name"], "Alpha Brewing");
        assert_eq!(json["values"][1], "Helles");
        assert!(json["total_distance_km"].as_f64().unwrap() > 222.0);
    }
}
