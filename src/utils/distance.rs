// Distance calculation utilities

use crate::models::{Km, Location};
use geo::{Point, HaversineDistance};

const METERS_PER_KM: f64 = 1000.0;

/// Calculate the great-circle distance between two locations in kilometers.
/// Uses the haversine formula over a spherical earth of mean radius.
pub fn great_circle_distance(p1: &Location, p2: &Location) -> Km {
    coordinate_distance(p1.latitude, p1.longitude, p2.latitude, p2.longitude)
}

/// Calculate the great-circle distance between two (latitude, longitude) pairs in kilometers
pub fn coordinate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Km {
    let from = Point::new(lon1, lat1);
    let to = Point::new(lon2, lat2);

    from.haversine_distance(&to) / METERS_PER_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let p = Location::new(1, "a", 48.1351, 11.5820);
        assert_eq!(great_circle_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let p1 = Location::new(1, "Munich", 48.1351, 11.5820);
        let p2 = Location::new(2, "Berlin", 52.5200, 13.4050);

        let there = great_circle_distance(&p1, &p2);
        let back = great_circle_distance(&p2, &p1);

        assert!((there - back).abs() < 1e-9);
        // roughly 504 km on a spherical earth
        assert!((there - 504.0).abs() < 3.0);
    }

    #[test]
    fn test_one_degree_on_equator() {
        let d = coordinate_distance(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.195).abs() < 0.01);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(coordinate_distance(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }
}
