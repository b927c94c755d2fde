use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Upper bound on the number of records a snapshot carries.
pub const SNAPSHOT_SIZE: usize = 15;

/// A published leaderboard: ranked, deduplicated records plus timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub data: Vec<Record>,
    pub last_updated: DateTime<Utc>,
    pub week_start: NaiveDate,
    pub generated_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}
