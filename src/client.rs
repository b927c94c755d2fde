use std::time::Duration;

use tracing::instrument;

use crate::airtable;
use crate::config::AirtableConfig;
use crate::error::{LeaderboardError, Result};
use crate::generator::LeaderboardSource;
use crate::model::RawRecord;

pub use crate::airtable::records::RecordQuery;

/// The entry point for reading the leaderboard table from Airtable.
///
/// `AirtableClient` wraps a [`reqwest::Client`] together with the table
/// coordinates and credential.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> reels_leaderboard::Result<()> {
/// use reels_leaderboard::{AirtableClient, Config, RecordQuery};
///
/// let config = Config::from_env()?;
/// let client = AirtableClient::with_timeout(config.airtable, config.http_timeout)?;
/// let rows = client
///     .list_records(&RecordQuery::top_by_views(100, Some(14)))
///     .await?;
/// println!("Fetched {} rows", rows.len());
/// # Ok(())
/// # }
/// ```
pub struct AirtableClient {
    http: reqwest::Client,
    config: AirtableConfig,
}

impl AirtableClient {
    /// Create a client with default HTTP settings.
    pub fn new(config: AirtableConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(config: AirtableConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LeaderboardError::Http {
                url: config.api_url.clone(),
                source: e,
            })?;
        Ok(Self::with_client(http, config))
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: AirtableConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &AirtableConfig {
        &self.config
    }

    /// Fetch the rows matching `query`, sorted by the query's field.
    #[instrument(skip(self))]
    pub async fn list_records(&self, query: &RecordQuery) -> Result<Vec<RawRecord>> {
        airtable::records::list_records(&self.http, &self.config, query).await
    }

    /// Download the raw bytes of an attachment.
    #[instrument(skip(self))]
    pub async fn get_image(&self, url: &str) -> Result<Vec<u8>> {
        airtable::images::get_image(&self.http, url).await
    }
}

impl LeaderboardSource for AirtableClient {
    async fn fetch_records(&self, query: &RecordQuery) -> Result<Vec<RawRecord>> {
        self.list_records(query).await
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        self.get_image(url).await
    }
}
