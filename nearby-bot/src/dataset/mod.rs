//! Real-time station dataset.
//!
//! Fetches the public YouBike JSON snapshot and converts its loosely-typed
//! records into [`StationRecord`](crate::domain::StationRecord)s. A fresh
//! snapshot is fetched for every location event.

mod client;
mod convert;
mod error;
mod source;
mod types;

pub use client::{DEFAULT_DATASET_URL, DatasetClient, DatasetClientConfig};
pub use convert::{DEFAULT_STATION_NAME, convert_dataset, convert_station};
pub use error::DatasetError;
pub use source::StationSource;
pub use types::{DatasetResponse, RawStation, Scalar, StationRecords};
