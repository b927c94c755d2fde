use std::path::Path;

use tracing::{debug, warn};

use super::LeaderboardSource;
use crate::error::{LeaderboardError, Result};
use crate::model::Record;

/// Filesystem-safe, lower-cased file stem for a handle.
pub fn sanitize_filename(handle: &str) -> String {
    handle
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Download each record's first thumbnail into `dir` and point the record
/// at `<url_prefix>/<file>`. A failed download leaves that record's remote
/// URL in place, and so does every record when `dir` cannot be created.
/// Returns how many images were cached.
pub async fn cache_thumbnails<S>(
    source: &S,
    records: &mut [Record],
    dir: &Path,
    url_prefix: &str,
) -> usize
where
    S: LeaderboardSource,
{
    if let Err(e) = tokio::fs::create_dir_all(dir).await {
        warn!(
            path = %dir.display(),
            error = %e,
            "thumbnail directory unavailable, keeping remote thumbnails"
        );
        return 0;
    }

    let mut cached = 0;
    for record in records.iter_mut() {
        match cache_one(source, record, dir, url_prefix).await {
            Ok(()) => cached += 1,
            Err(e) => warn!(handle = %record.handle, error = %e, "keeping remote thumbnail"),
        }
    }

    debug!(cached, total = records.len(), "cached thumbnails");
    cached
}

async fn cache_one<S>(source: &S, record: &mut Record, dir: &Path, url_prefix: &str) -> Result<()>
where
    S: LeaderboardSource,
{
    let Some(images) = record.thumbnail.as_mut().filter(|t| !t.is_empty()) else {
        return Ok(());
    };

    let file_name = format!("{}.jpg", sanitize_filename(&record.handle));
    let path = dir.join(&file_name);

    let bytes = source.fetch_image(&images[0].url).await?;
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| LeaderboardError::io(&path, e))?;

    images[0] = images[0].localized(format!("{url_prefix}/{file_name}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("@Cook.Daily"), "_cook.daily");
        assert_eq!(sanitize_filename("mom_life-22"), "mom_life-22");
        assert_eq!(sanitize_filename("뷰티 queen!"), "___queen_");
        assert_eq!(sanitize_filename(""), "");
    }
}
