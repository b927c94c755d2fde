use std::path::PathBuf;

/// All errors that can occur while generating or loading a leaderboard.
#[derive(thiserror::Error, Debug)]
pub enum LeaderboardError {
    /// A required environment variable is missing or holds an invalid value.
    #[error("configuration error for {var}: {reason}")]
    Config { var: &'static str, reason: String },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The remote table returned no records at all.
    #[error("no records found")]
    NoRecords,

    /// Reading or writing a local file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A snapshot could not be serialized for writing.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// A snapshot file exists but is not a valid snapshot document.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(#[source] serde_json::Error),

    /// An operation did not finish within its time bound.
    #[error("timed out after {seconds}s loading {target}")]
    Timeout { target: String, seconds: u64 },

    /// A URL could not be built from the configured parts.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl LeaderboardError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LeaderboardError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;
