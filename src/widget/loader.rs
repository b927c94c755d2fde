use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, instrument};

use crate::error::{LeaderboardError, Result};
use crate::http;
use crate::model::Snapshot;

pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a published snapshot is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotLocation {
    File(PathBuf),
    Url(String),
}

impl std::fmt::Display for SnapshotLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotLocation::File(path) => write!(f, "{}", path.display()),
            SnapshotLocation::Url(url) => f.write_str(url),
        }
    }
}

/// Decode a snapshot document. Anything that does not match the snapshot
/// shape is reported as [`LeaderboardError::MalformedSnapshot`].
pub fn parse_snapshot(body: &str) -> Result<Snapshot> {
    serde_json::from_str(body).map_err(LeaderboardError::MalformedSnapshot)
}

/// Reads published snapshots, giving up after a fixed timeout.
pub struct SnapshotLoader {
    http: reqwest::Client,
    timeout: Duration,
}

impl SnapshotLoader {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_LOAD_TIMEOUT)
    }

    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            http: client,
            timeout,
        }
    }

    /// Load and decode the snapshot at `location`.
    ///
    /// Dropping the returned future cancels the load.
    #[instrument(skip(self, location), fields(location = %location))]
    pub async fn load(&self, location: &SnapshotLocation) -> Result<Snapshot> {
        let body = tokio::time::timeout(self.timeout, self.read(location))
            .await
            .map_err(|_| LeaderboardError::Timeout {
                target: location.to_string(),
                seconds: self.timeout.as_secs(),
            })??;

        let snapshot = parse_snapshot(&body)?;
        debug!(entries = snapshot.len(), "loaded snapshot");
        Ok(snapshot)
    }

    async fn read(&self, location: &SnapshotLocation) -> Result<String> {
        match location {
            SnapshotLocation::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LeaderboardError::io(path, e)),
            SnapshotLocation::Url(url) => http::send(self.http.get(url), url)
                .await?
                .text()
                .await
                .map_err(|e| LeaderboardError::ResponseBody {
                    url: url.clone(),
                    source: e,
                }),
        }
    }
}

impl Default for SnapshotLoader {
    fn default() -> Self {
        Self::new()
    }
}
