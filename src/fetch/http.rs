use std::time::Duration;

use tracing::debug;

use crate::core::Snapshot;
use crate::error::FetchError;
use crate::fetch::{FilterParams, SnapshotTransport};

/// Blocking HTTP transport for a fixed statistics endpoint.
///
/// One `fetch` is one GET with the filter encoded as query parameters; the
/// response body deserializes straight into [`Snapshot`].
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpTransport {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(endpoint, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("http client error: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl SnapshotTransport for HttpTransport {
    fn fetch(&mut self, filter: &FilterParams) -> Result<Snapshot, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&filter.to_query())
            .send()
            .map_err(|e| FetchError::Transport(format!("snapshot request error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Transport(format!("snapshot read error: {e}")))?;
        let snapshot: Snapshot = serde_json::from_str(&body)?;
        debug!(endpoint = %self.endpoint, months = snapshot.months.len(), "fetched statistics snapshot");
        Ok(snapshot)
    }
}
