pub mod format;
pub mod rank;
pub mod thumbnails;
pub mod writer;

use std::future::Future;

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::airtable::records::RecordQuery;
use crate::config::GeneratorOptions;
use crate::error::{LeaderboardError, Result};
use crate::model::{RawRecord, Snapshot, SNAPSHOT_SIZE};

pub use format::{format_view_count, week_start};
pub use rank::{rank_records, to_record};
pub use thumbnails::sanitize_filename;
pub use writer::{write_snapshot, WrittenFiles};

/// Where the generator reads rows and images from.
pub trait LeaderboardSource {
    fn fetch_records(&self, query: &RecordQuery) -> impl Future<Output = Result<Vec<RawRecord>>> + Send;

    fn fetch_image(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// One-shot snapshot pipeline over a [`LeaderboardSource`].
pub struct Generator<S> {
    source: S,
    options: GeneratorOptions,
}

impl<S: LeaderboardSource> Generator<S> {
    pub fn new(source: S, options: GeneratorOptions) -> Self {
        Self { source, options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Fetch, rank and publish a snapshot stamped with the current time.
    pub async fn generate(&self) -> Result<Snapshot> {
        self.generate_at(Utc::now()).await
    }

    /// Same as [`Generator::generate`] with an explicit clock reading.
    ///
    /// Nothing is written unless the fetch succeeds with at least one row.
    #[instrument(skip(self), fields(output = %self.options.output_dir.display()))]
    pub async fn generate_at(&self, now: DateTime<Utc>) -> Result<Snapshot> {
        let query = RecordQuery::top_by_views(self.options.max_records, self.options.recent_days);
        info!(max_records = query.max_records, recent_days = ?query.recent_days, "fetching records");

        let raw = self.source.fetch_records(&query).await?;
        if raw.is_empty() {
            return Err(LeaderboardError::NoRecords);
        }
        info!(count = raw.len(), "fetched records");

        let mut records = rank_records(raw);
        if records.len() < SNAPSHOT_SIZE {
            warn!(
                count = records.len(),
                expected = SNAPSHOT_SIZE,
                "fewer unique records with thumbnails than the leaderboard holds"
            );
        }

        if self.options.download_thumbnails {
            thumbnails::cache_thumbnails(
                &self.source,
                &mut records,
                &self.options.thumbnail_dir,
                &self.options.thumbnail_url_prefix,
            )
            .await;
        }

        let snapshot = Snapshot {
            data: records,
            last_updated: now,
            week_start: week_start(now.date_naive()),
            generated_at: now,
        };
        write_snapshot(&snapshot, &self.options.output_dir).await?;

        info!(entries = snapshot.len(), week_start = %snapshot.week_start, "leaderboard generated");
        Ok(snapshot)
    }
}
