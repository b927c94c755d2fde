use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{LeaderboardError, Result};

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Connection details for the source table. All three values must come from
/// the environment; there are no built-in fallbacks. The `VITE_*` names used
/// by the original web build are read when the primary name is unset.
#[derive(Clone)]
pub struct AirtableConfig {
    pub api_url: String,
    pub api_key: String,
    pub base_id: String,
    pub table_name: String,
}

impl std::fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .finish()
    }
}

/// Knobs of the snapshot pipeline.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub output_dir: PathBuf,
    pub thumbnail_dir: PathBuf,
    pub thumbnail_url_prefix: String,
    pub download_thumbnails: bool,
    pub max_records: u32,
    /// Only consider records dated within this many days; `None` disables
    /// the filter.
    pub recent_days: Option<u32>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("public/data"),
            thumbnail_dir: PathBuf::from("public/thumbnails"),
            thumbnail_url_prefix: "/thumbnails".to_string(),
            download_thumbnails: true,
            max_records: 100,
            recent_days: Some(14),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub airtable: AirtableConfig,
    pub generator: GeneratorOptions,
    pub http_timeout: Duration,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = GeneratorOptions::default();

        let airtable = AirtableConfig {
            api_url: get("AIRTABLE_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key: required(&get, "AIRTABLE_API_KEY", "VITE_AIRTABLE_API_KEY")?,
            base_id: required(&get, "AIRTABLE_BASE_ID", "VITE_BASE_ID")?,
            table_name: required(&get, "AIRTABLE_TABLE_NAME", "VITE_TABLE_NAME")?,
        };

        let recent_days: u32 = parsed(&get, "LEADERBOARD_RECENT_DAYS")?.unwrap_or(14);
        let max_records: u32 = parsed(&get, "LEADERBOARD_MAX_RECORDS")?.unwrap_or(defaults.max_records);
        if max_records == 0 {
            return Err(LeaderboardError::Config {
                var: "LEADERBOARD_MAX_RECORDS",
                reason: "must be greater than zero".to_string(),
            });
        }

        let generator = GeneratorOptions {
            output_dir: get("LEADERBOARD_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            thumbnail_dir: get("LEADERBOARD_THUMBNAIL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.thumbnail_dir),
            thumbnail_url_prefix: get("LEADERBOARD_THUMBNAIL_URL_PREFIX")
                .map(|p| p.trim_end_matches('/').to_string())
                .unwrap_or(defaults.thumbnail_url_prefix),
            download_thumbnails: flag(&get, "LEADERBOARD_DOWNLOAD_THUMBNAILS")?
                .unwrap_or(defaults.download_thumbnails),
            max_records,
            recent_days: (recent_days > 0).then_some(recent_days),
        };

        let timeout_secs: u64 = parsed(&get, "LEADERBOARD_HTTP_TIMEOUT_SECS")?.unwrap_or(30);

        Ok(Self {
            airtable,
            generator,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn required(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    legacy: &'static str,
) -> Result<String> {
    get(var)
        .or_else(|| get(legacy))
        .ok_or_else(|| LeaderboardError::Config {
            var,
            reason: format!("not set (nor {legacy})"),
        })
}

fn parsed<T>(get: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get(var)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| LeaderboardError::Config {
                var,
                reason: format!("{raw:?}: {e}"),
            })
        })
        .transpose()
}

fn flag(get: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<Option<bool>> {
    let Some(raw) = get(var) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(LeaderboardError::Config {
            var,
            reason: format!("{raw:?} is not a boolean"),
        }),
    }
}
