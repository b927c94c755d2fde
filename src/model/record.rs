use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

pub const UNKNOWN_HANDLE: &str = "@unknown";
pub const DEFAULT_CAPTION: &str = "릴스 영상을 확인해보세요!";

/// One leaderboard entry.
///
/// Field names on the wire are the column labels of the published
/// snapshot, so existing `current.json` files stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Instagram ID")]
    pub handle: String,
    #[serde(rename = "조회수")]
    pub views: u64,
    #[serde(rename = "조회수_한국어")]
    pub views_label: String,
    #[serde(rename = "날짜", default)]
    pub date: String,
    #[serde(rename = "카테고리")]
    pub category: String,
    #[serde(rename = "캡션")]
    pub caption: String,
    #[serde(rename = "썸네일")]
    pub thumbnail: Option<Vec<Attachment>>,
    #[serde(rename = "영상URL", default)]
    pub video_url: Option<String>,
}

impl Record {
    /// The image the widget shows for this record.
    pub fn primary_thumbnail(&self) -> Option<&Attachment> {
        self.thumbnail.as_deref().and_then(<[Attachment]>::first)
    }

    pub fn has_thumbnail(&self) -> bool {
        self.primary_thumbnail().is_some()
    }

    /// Where a click on this record's card should lead. Only http(s)
    /// video URLs are followed; anything else falls back to the profile.
    pub fn link(&self) -> String {
        match self.video_url.as_deref().map(str::trim).filter(|u| is_web_url(u)) {
            Some(url) => url.to_string(),
            None => profile_url(&self.handle),
        }
    }
}

fn is_web_url(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.len() > scheme.len()
            && url
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Instagram profile URL for a handle, with or without the leading `@`.
pub fn profile_url(handle: &str) -> String {
    format!("https://www.instagram.com/{}/", handle.replace('@', ""))
}

/// An image descriptor as the remote table delivers it.
///
/// Only `url` is guaranteed. `id`, `filename` and `thumbnails` are remote
/// metadata that are dropped once the image is cached locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub thumbnails: Option<serde_json::Value>,
}

impl Attachment {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: None,
            url: url.into(),
            width: None,
            height: None,
            filename: None,
            size: None,
            content_type: None,
            thumbnails: None,
        }
    }

    /// Point this descriptor at a locally cached copy, keeping only the
    /// dimensional metadata.
    pub fn localized(&self, local_url: impl Into<String>) -> Self {
        Self {
            url: local_url.into(),
            width: self.width,
            height: self.height,
            size: self.size,
            content_type: self.content_type.clone(),
            ..Self::new(String::new())
        }
    }
}

/// The fixed set of content categories.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, AsRefStr,
    strum_macros::Display,
)]
pub enum Category {
    #[strum(serialize = "뷰티/미용")]
    Beauty,
    #[strum(serialize = "살림/육아")]
    Parenting,
    #[strum(serialize = "비즈니스")]
    Business,
    #[strum(serialize = "헬스케어")]
    Healthcare,
    #[strum(serialize = "퍼스널")]
    Personal,
    #[strum(serialize = "패션")]
    Fashion,
    #[default]
    #[strum(serialize = "기타")]
    Other,
}

impl Category {
    /// Resolve a free-form label, falling back to [`Category::Other`].
    pub fn from_label(label: &str) -> Self {
        label.trim().parse().unwrap_or_default()
    }
}
