//! Station dataset HTTP client.

use tracing::debug;

use super::error::DatasetError;
use super::types::DatasetResponse;

/// Default dataset URL: Taipei YouBike real-time snapshot.
pub const DEFAULT_DATASET_URL: &str =
    "https://tcgbusfs.blob.core.windows.net/blobyoubike/YouBikeTP.json";

/// Configuration for the dataset client.
#[derive(Debug, Clone)]
pub struct DatasetClientConfig {
    /// Full URL of the JSON snapshot
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DatasetClientConfig {
    /// Create a config pointing at the default dataset.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_DATASET_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom dataset URL (other cities, or testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for DatasetClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the real-time station dataset.
///
/// Every call to [`fetch`](Self::fetch) downloads a fresh snapshot;
/// nothing is cached between requests.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    http: reqwest::Client,
    url: String,
}

impl DatasetClient {
    /// Create a new dataset client.
    pub fn new(config: DatasetClientConfig) -> Result<Self, DatasetError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The URL this client fetches from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current snapshot.
    pub async fn fetch(&self) -> Result<DatasetResponse, DatasetError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DatasetError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), url = %self.url, "fetched station dataset");

        parse_response(&body)
    }
}

/// Parse a raw snapshot body.
pub(crate) fn parse_response(body: &str) -> Result<DatasetResponse, DatasetError> {
    serde_json::from_str(body).map_err(|e| DatasetError::Json {
        message: e.to_string(),
    })
}
