//! Conversion from raw feed records to domain station records.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{GeoPoint, StationRecord};
use crate::ranker::MissingCoordinatePolicy;

use super::types::{DatasetResponse, RawStation, Scalar};

/// Name used when a record has neither a station nor a district name.
pub const DEFAULT_STATION_NAME: &str = "停車場";

/// Convert a whole dataset response into station records, in feed order.
///
/// Records that are not JSON objects of the expected shape are skipped.
/// Records without usable coordinates are handled per `policy`.
pub fn convert_dataset(
    response: &DatasetResponse,
    policy: MissingCoordinatePolicy,
) -> Vec<StationRecord> {
    let mut skipped = 0usize;

    let stations: Vec<StationRecord> = response
        .ret_val
        .values()
        .filter_map(|value| match RawStation::deserialize(value).ok() {
            Some(raw) => convert_station(&raw, policy),
            None => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!(skipped, "skipped malformed dataset records");
    }

    debug!(
        records = response.ret_val.len(),
        stations = stations.len(),
        "converted dataset"
    );

    stations
}

/// Convert a single raw record.
///
/// Returns `None` only when a coordinate is missing, non-numeric or not
/// finite and the policy is
/// [`MissingCoordinatePolicy::Exclude`].
pub fn convert_station(raw: &RawStation, policy: MissingCoordinatePolicy) -> Option<StationRecord> {
    let lat = raw.lat.as_ref().and_then(|s| s.as_f64());
    let lng = raw.lng.as_ref().and_then(|s| s.as_f64());

    let position = match (lat, lng, policy) {
        (Some(lat), Some(lng), _) => GeoPoint::new(lat, lng),
        (_, _, MissingCoordinatePolicy::Exclude) => return None,
        (lat, lng, MissingCoordinatePolicy::ZeroFallback) => {
            GeoPoint::new(lat.unwrap_or(0.0), lng.unwrap_or(0.0))
        }
    };

    let name = non_empty(raw.sna.as_ref())
        .or_else(|| non_empty(raw.sarea.as_ref()))
        .unwrap_or_else(|| DEFAULT_STATION_NAME.to_string());

    let available_slots = raw.sbi.as_ref().and_then(|s| s.as_u32()).unwrap_or(0);

    Some(StationRecord::new(name, position, available_slots))
}

fn non_empty(s: Option<&Scalar>) -> Option<String> {
    s.map(Scalar::as_text).filter(|s| !s.trim().is_empty())
}
