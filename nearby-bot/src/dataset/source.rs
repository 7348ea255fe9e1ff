//! Where station data comes from.

use std::path::Path;
use std::sync::Arc;

use crate::domain::StationRecord;
use crate::ranker::MissingCoordinatePolicy;

use super::client::{DatasetClient, parse_response};
use super::convert::convert_dataset;
use super::error::DatasetError;
use super::types::DatasetResponse;

/// A source of station snapshots.
///
/// `Live` fetches over HTTP on every call. `Fixed` serves a snapshot loaded
/// once from disk, which is useful for development without network access.
#[derive(Debug, Clone)]
pub enum StationSource {
    Live(DatasetClient),
    Fixed(Arc<DatasetResponse>),
}

impl StationSource {
    /// Load a fixed snapshot from a JSON file in the feed's format.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(StationSource::Fixed(Arc::new(parse_response(&json)?)))
    }

    /// Get the current stations, in feed order.
    pub async fn stations(
        &self,
        policy: MissingCoordinatePolicy,
    ) -> Result<Vec<StationRecord>, DatasetError> {
        match self {
            StationSource::Live(client) => {
                let response = client.fetch().await?;
                Ok(convert_dataset(&response, policy))
            }
            StationSource::Fixed(response) => Ok(convert_dataset(response, policy)),
        }
    }
}
