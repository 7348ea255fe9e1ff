//! Nearest-station ranking.

use std::cmp::Ordering;

use crate::domain::{GeoPoint, RankedStation, StationRecord, distance};

/// Rank stations by distance from `origin`, nearest first.
///
/// Returns at most `k` stations. The sort is stable, so stations at equal
/// distance keep their dataset order. NaN distances (from non-finite
/// coordinates) sort after every real distance.
pub fn rank<I>(origin: GeoPoint, stations: I, k: usize) -> Vec<RankedStation>
where
    I: IntoIterator<Item = StationRecord>,
{
    let mut ranked: Vec<RankedStation> = stations
        .into_iter()
        .map(|station| {
            let distance_meters = distance(origin, station.position);
            RankedStation {
                station,
                distance_meters,
            }
        })
        .collect();

    ranked.sort_by(|a, b| by_distance(a.distance_meters, b.distance_meters));
    ranked.truncate(k);
    ranked
}

/// Ascending order with NaN after every number.
fn by_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, lat: f64, lng: f64) -> StationRecord {
        StationRecord::new(name, GeoPoint::new(lat, lng), 5)
    }

    fn names(ranked: &[RankedStation]) -> Vec<&str> {
        ranked.iter().map(|r| r.station.name.as_str()).collect()
    }

    const ORIGIN: GeoPoint = GeoPoint::new(25.0, 121.5);

    #[test]
    fn sorts_nearest_first() {
        let stations = vec![
            station("far", 25.1, 121.5),
            station("near", 25.001, 121.5),
            station("middle", 25.01, 121.5),
        ];

        let ranked = rank(ORIGIN, stations, 10);

        assert_eq!(names(&ranked), ["near", "middle", "far"]);
    }

    #[test]
    fn truncates_to_k() {
        let stations: Vec<_> = (0..25)
            .map(|i| station(&format!("s{i}"), 25.0 + i as f64 * 0.001, 121.5))
            .collect();

        let ranked = rank(ORIGIN, stations, 10);

        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].station.name, "s0");
        assert_eq!(ranked[9].station.name, "s9");
    }

    #[test]
    fn fewer_stations_than_k() {
        let ranked = rank(ORIGIN, vec![station("only", 25.0, 121.5)], 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].distance_meters, 0.0);
    }

    #[test]
    fn empty_dataset() {
        assert!(rank(ORIGIN, Vec::<StationRecord>::new(), 10).is_empty());
    }

    #[test]
    fn ties_keep_dataset_order() {
        // Same offset north and south of the origin
        let stations = vec![
            station("first", 25.01, 121.5),
            station("second", 24.99, 121.5),
            station("third", 25.01, 121.5),
        ];

        let ranked = rank(ORIGIN, stations, 10);

        assert_eq!(ranked[0].distance_meters, ranked[2].distance_meters);
        assert_eq!(names(&ranked)[0], "first");
        assert_eq!(names(&ranked)[2], "third");
    }

    #[test]
    fn zero_coordinates_rank_last() {
        let stations = vec![
            station("null island", 0.0, 0.0),
            station("nearby", 25.002, 121.501),
        ];

        let ranked = rank(ORIGIN, stations, 1);

        assert_eq!(names(&ranked), ["nearby"]);
    }

    #[test]
    fn nan_distances_sort_last() {
        let stations = vec![
            station("broken", f64::NAN, 121.5),
            station("ok", 25.5, 121.5),
        ];

        let ranked = rank(ORIGIN, stations, 10);

        assert_eq!(names(&ranked), ["ok", "broken"]);
        assert!(ranked[1].distance_meters.is_nan());
    }

    #[test]
    fn distances_match_haversine() {
        let s = station("x", 25.0478, 121.5319);
        let expected = distance(ORIGIN, s.position);

        let ranked = rank(ORIGIN, vec![s], 10);

        assert_eq!(ranked[0].distance_meters, expected);
    }
}
