use itertools::Itertools;

use super::format::format_view_count;
use crate::model::{Category, RawRecord, Record, DEFAULT_CAPTION, SNAPSHOT_SIZE, UNKNOWN_HANDLE};

/// Fill in defaults for a raw row.
pub fn to_record(raw: RawRecord) -> Record {
    let fields = raw.fields;
    let views = fields.views.unwrap_or(0);

    Record {
        handle: fields
            .handle
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| UNKNOWN_HANDLE.to_string()),
        views,
        views_label: format_view_count(views),
        date: fields.date.unwrap_or_default(),
        category: fields
            .category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| Category::Other.to_string()),
        caption: fields
            .caption
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CAPTION.to_string()),
        thumbnail: fields.thumbnail,
        video_url: fields.url.filter(|u| !u.is_empty()),
    }
}

/// Turn raw rows into leaderboard order: rows without a thumbnail are
/// dropped, the rest sorted by views descending (ties keep source order),
/// deduplicated by handle and cut to [`SNAPSHOT_SIZE`].
pub fn rank_records(raw: Vec<RawRecord>) -> Vec<Record> {
    let mut records: Vec<Record> = raw
        .into_iter()
        .map(to_record)
        .filter(Record::has_thumbnail)
        .collect();

    records.sort_by(|a, b| b.views.cmp(&a.views));

    records
        .into_iter()
        .unique_by(|r| r.handle.clone())
        .take(SNAPSHOT_SIZE)
        .collect()
}
