use tracing::{debug, instrument};

use crate::error::{LeaderboardError, Result};
use crate::http;

/// Download an attachment. Attachment URLs are pre-signed, so no
/// credentials are sent.
#[instrument(skip(client))]
pub(crate) async fn get_image(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = http::send(client.get(url), url).await?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| LeaderboardError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })?;

    debug!(len = bytes.len(), "downloaded image");
    Ok(bytes.to_vec())
}
