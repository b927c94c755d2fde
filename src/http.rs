use reqwest::RequestBuilder;
use tracing::debug;

use crate::error::{LeaderboardError, Result};

/// Send a prepared request, mapping transport errors and non-success
/// statuses onto [`LeaderboardError`].
pub(crate) async fn send(request: RequestBuilder, url: &str) -> Result<reqwest::Response> {
    debug!(url, "sending request");

    let response = request.send().await.map_err(|e| LeaderboardError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LeaderboardError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    Ok(response)
}
