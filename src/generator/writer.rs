use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{LeaderboardError, Result};
use crate::model::Snapshot;

pub const CURRENT_FILE: &str = "current.json";
const CURRENT_TEMP_FILE: &str = ".current.json.tmp";

/// Archive file name for the week starting on `snapshot.week_start`.
pub fn backup_file_name(snapshot: &Snapshot) -> String {
    format!("leaderboard-{}.json", snapshot.week_start.format("%Y-%m-%d"))
}

/// Paths written by [`write_snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub current: PathBuf,
    pub backup: PathBuf,
}

/// Write `snapshot` as its weekly archive copy, then swap it in as
/// `current.json`.
///
/// `current.json` is replaced by a rename from a sibling temp file, so
/// readers see either the previous snapshot or the new one. Any failure
/// leaves the previous `current.json` untouched.
pub async fn write_snapshot(snapshot: &Snapshot, dir: &Path) -> Result<WrittenFiles> {
    let json = serde_json::to_string_pretty(snapshot).map_err(LeaderboardError::Encode)?;

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| LeaderboardError::io(dir, e))?;

    let backup = dir.join(backup_file_name(snapshot));
    tokio::fs::write(&backup, &json)
        .await
        .map_err(|e| LeaderboardError::io(&backup, e))?;
    info!(path = %backup.display(), "wrote backup snapshot");

    let current = dir.join(CURRENT_FILE);
    replace_file(&current, &dir.join(CURRENT_TEMP_FILE), &json).await?;
    info!(path = %current.display(), "wrote current snapshot");

    Ok(WrittenFiles { current, backup })
}

async fn replace_file(path: &Path, temp: &Path, contents: &str) -> Result<()> {
    if let Err(e) = tokio::fs::write(temp, contents).await {
        discard(temp).await;
        return Err(LeaderboardError::io(temp, e));
    }
    if let Err(e) = tokio::fs::rename(temp, path).await {
        discard(temp).await;
        return Err(LeaderboardError::io(path, e));
    }
    Ok(())
}

async fn discard(temp: &Path) {
    if let Err(e) = tokio::fs::remove_file(temp).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %temp.display(), error = %e, "failed to remove temp file");
        }
    }
}
