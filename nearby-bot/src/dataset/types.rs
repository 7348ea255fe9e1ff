//! Station dataset response DTOs.
//!
//! These types map onto the YouBike real-time JSON snapshot. The feed is
//! loosely typed: numbers arrive as strings or numbers depending on the
//! city and API version, and fields are sometimes missing or empty.

use serde::Deserialize;
use serde_json::Value;

/// Top-level dataset response.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetResponse {
    /// Feed status code (1 on success for YouBike).
    #[serde(rename = "retCode")]
    pub ret_code: Option<i64>,

    /// The station records.
    #[serde(rename = "retVal")]
    pub ret_val: StationRecords,
}

/// Station records, keyed by station ID or as a plain list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StationRecords {
    /// `{ "0001": {...}, "0002": {...} }`, in feed order.
    Keyed(serde_json::Map<String, Value>),

    /// `[ {...}, {...} ]`
    List(Vec<Value>),
}

impl StationRecords {
    /// Iterate over the raw record values in feed order.
    pub fn values(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            StationRecords::Keyed(map) => Box::new(map.values()),
            StationRecords::List(list) => Box::new(list.iter()),
        }
    }

    /// Number of raw records.
    pub fn len(&self) -> usize {
        match self {
            StationRecords::Keyed(map) => map.len(),
            StationRecords::List(list) => list.len(),
        }
    }

    /// Whether the feed contained no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single station as it appears in the feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStation {
    /// Station name.
    pub sna: Option<Scalar>,

    /// District name, used when the station name is missing.
    #[serde(alias = "sArea")]
    pub sarea: Option<Scalar>,

    /// Latitude in degrees.
    pub lat: Option<Scalar>,

    /// Longitude in degrees.
    pub lng: Option<Scalar>,

    /// Available slots.
    pub sbi: Option<Scalar>,
}

/// A JSON value that may be a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Parse as a finite float. Empty, non-numeric, NaN and infinite
    /// values give `None`.
    pub fn as_f64(&self) -> Option<f64> {
        let n = match self {
            Scalar::Number(n) => *n,
            Scalar::Text(s) => s.trim().parse().ok()?,
        };
        n.is_finite().then_some(n)
    }

    /// Parse as a non-negative count, truncating any fraction.
    pub fn as_u32(&self) -> Option<u32> {
        self.as_f64()
            .filter(|n| *n >= 0.0)
            .map(|n| n.min(u32::MAX as f64) as u32)
    }

    /// The value as display text. Numbers are formatted without a
    /// trailing `.0`.
    pub fn as_text(&self) -> String {
        match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s.clone(),
        }
    }
}
