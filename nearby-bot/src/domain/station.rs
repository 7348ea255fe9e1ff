//! Station records and their ranked form.

use super::GeoPoint;

/// A bike-share or parking station from a dataset snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    /// Display name
    pub name: String,

    /// Station location
    pub position: GeoPoint,

    /// Free slots (bikes or parking spaces) at snapshot time
    pub available_slots: u32,
}

impl StationRecord {
    /// Create a new station record.
    pub fn new(name: impl Into<String>, position: GeoPoint, available_slots: u32) -> Self {
        Self {
            name: name.into(),
            position,
            available_slots,
        }
    }
}

/// A station together with its distance from the user.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStation {
    pub station: StationRecord,

    /// Great-circle distance from the origin, in meters
    pub distance_meters: f64,
}

impl RankedStation {
    /// Distance rounded to the nearest whole meter, half away from zero.
    pub fn rounded_distance(&self) -> i64 {
        self.distance_meters.round() as i64
    }
}
