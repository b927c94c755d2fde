use serde::{Deserialize, Deserializer};

use super::Attachment;

/// Column names in the source table.
pub mod fields {
    pub const HANDLE: &str = "Instagram ID";
    pub const VIEWS: &str = "조회수";
    pub const DATE: &str = "날짜";
    pub const CATEGORY: &str = "카테고리";
    pub const CAPTION: &str = "캡션";
    pub const THUMBNAIL: &str = "썸네일";
    pub const URL: &str = "URL";

    /// Every column the generator asks for, in request order.
    pub const ALL: [&str; 7] = [HANDLE, VIEWS, DATE, CATEGORY, CAPTION, THUMBNAIL, URL];
}

/// Body of an Airtable "list records" response.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsPage {
    #[serde(default)]
    pub records: Vec<RawRecord>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// A row as Airtable returns it, before any defaults are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fields: RawFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFields {
    #[serde(rename = "Instagram ID")]
    pub handle: Option<String>,
    #[serde(rename = "조회수", default, deserialize_with = "views_from_number")]
    pub views: Option<u64>,
    #[serde(rename = "날짜")]
    pub date: Option<String>,
    #[serde(rename = "카테고리")]
    pub category: Option<String>,
    #[serde(rename = "캡션")]
    pub caption: Option<String>,
    #[serde(rename = "썸네일")]
    pub thumbnail: Option<Vec<Attachment>>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

/// Number fields may arrive as floats; negative or fractional counts are
/// clamped and truncated.
fn views_from_number<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.map(|n| {
        n.as_u64()
            .unwrap_or_else(|| n.as_f64().map(|f| f.max(0.0) as u64).unwrap_or(0))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_page() {
        let body = r#"{
            "records": [
                {"id": "rec1", "createdTime": "2024-05-01T00:00:00.000Z",
                 "fields": {"Instagram ID": "@a", "조회수": 15320.0, "썸네일": [{"url": "https://x/1.jpg"}]}},
                {"id": "rec2", "fields": {"조회수": -3}},
                {"id": "rec3", "fields": {}}
            ],
            "offset": "itr123"
        }"#;
        let page: RecordsPage = serde_json::from_str(body).unwrap();

        assert_eq!(page.records.len(), 3);
        assert_eq!(page.offset.as_deref(), Some("itr123"));
        assert_eq!(page.records[0].fields.views, Some(15320));
        assert_eq!(page.records[0].fields.handle.as_deref(), Some("@a"));
        assert_eq!(page.records[1].fields.views, Some(0));
        assert_eq!(page.records[2].fields.views, None);
        assert!(page.records[2].fields.thumbnail.is_none());
    }
}
