use reqwest::Url;
use tracing::{debug, instrument};

use crate::airtable;
use crate::config::AirtableConfig;
use crate::error::{LeaderboardError, Result};
use crate::model::{fields, RawRecord, RecordsPage};

/// Parameters of a "list records" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    /// Field to sort by, descending.
    pub sort_field: String,
    pub max_records: u32,
    /// Only return rows dated within this many days.
    pub recent_days: Option<u32>,
    pub fields: Vec<String>,
}

impl RecordQuery {
    /// Top records by view count, restricted to the leaderboard columns.
    pub fn top_by_views(max_records: u32, recent_days: Option<u32>) -> Self {
        Self {
            sort_field: fields::VIEWS.to_string(),
            max_records,
            recent_days,
            fields: fields::ALL.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Airtable formula limiting rows to the recency window.
    pub fn filter_formula(&self) -> Option<String> {
        self.recent_days.map(|days| {
            format!(
                "IS_AFTER({{{}}}, DATEADD(TODAY(), -{days}, 'days'))",
                fields::DATE
            )
        })
    }
}

/// Build the request URL for one page of `query` against `config`.
pub(crate) fn build_url(config: &AirtableConfig, query: &RecordQuery, offset: Option<&str>) -> Result<Url> {
    let base = format!("{}/{}", config.api_url, config.base_id);
    let mut url = Url::parse(&base).map_err(|e| LeaderboardError::InvalidUrl(format!("{base}: {e}")))?;

    url.path_segments_mut()
        .map_err(|_| LeaderboardError::InvalidUrl(base.clone()))?
        .push(&config.table_name);

    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("sort[0][field]", &query.sort_field)
            .append_pair("sort[0][direction]", "desc")
            .append_pair("maxRecords", &query.max_records.to_string());
        if let Some(formula) = query.filter_formula() {
            pairs.append_pair("filterByFormula", &formula);
        }
        for field in &query.fields {
            pairs.append_pair("fields[]", field);
        }
        if let Some(offset) = offset {
            pairs.append_pair("offset", offset);
        }
    }

    Ok(url)
}

/// Fetch every row matching `query`, following pagination until the
/// source stops returning an offset or `max_records` rows are collected.
#[instrument(skip(client, config), fields(table = %config.table_name))]
pub(crate) async fn list_records(
    client: &reqwest::Client,
    config: &AirtableConfig,
    query: &RecordQuery,
) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    let mut offset: Option<String> = None;

    loop {
        let url = build_url(config, query, offset.as_deref())?;
        let page: RecordsPage = airtable::get_json(client, url, &config.api_key).await?;
        debug!(count = page.records.len(), "fetched records page");

        records.extend(page.records);
        match page.offset {
            Some(next) if records.len() < query.max_records as usize => offset = Some(next),
            _ => break,
        }
    }

    records.truncate(query.max_records as usize);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AirtableConfig {
        AirtableConfig {
            api_url: "https://api.airtable.com/v0".to_string(),
            api_key: "pat.test".to_string(),
            base_id: "appBase".to_string(),
            table_name: "영상 DB".to_string(),
        }
    }

    fn query_values(url: &Url, key: &str) -> Vec<String> {
        url.query_pairs()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .collect()
    }

    #[test]
    fn test_build_url_with_recent_filter() {
        let query = RecordQuery::top_by_views(100, Some(14));
        let url = build_url(&config(), &query, None).unwrap();

        assert_eq!(url.host_str(), Some("api.airtable.com"));
        let segments: Vec<_> = url.path_segments().unwrap().collect();
        assert_eq!(segments, ["v0", "appBase", "%EC%98%81%EC%83%81%20DB"]);

        assert_eq!(query_values(&url, "sort[0][field]"), ["조회수"]);
        assert_eq!(query_values(&url, "sort[0][direction]"), ["desc"]);
        assert_eq!(query_values(&url, "maxRecords"), ["100"]);
        assert_eq!(
            query_values(&url, "filterByFormula"),
            ["IS_AFTER({날짜}, DATEADD(TODAY(), -14, 'days'))"]
        );
        assert_eq!(query_values(&url, "fields[]"), fields::ALL);
        assert!(query_values(&url, "offset").is_empty());
    }

    #[test]
    fn test_build_url_without_filter_and_with_offset() {
        let query = RecordQuery::top_by_views(50, None);
        let url = build_url(&config(), &query, Some("itr42/rec9")).unwrap();

        assert!(query_values(&url, "filterByFormula").is_empty());
        assert_eq!(query_values(&url, "maxRecords"), ["50"]);
        assert_eq!(query_values(&url, "offset"), ["itr42/rec9"]);
    }

    #[test]
    fn test_build_url_rejects_bad_base() {
        let mut config = config();
        config.api_url = "not a url".to_string();
        let query = RecordQuery::top_by_views(10, None);
        assert!(matches!(
            build_url(&config, &query, None),
            Err(LeaderboardError::InvalidUrl(_))
        ));
    }
}
