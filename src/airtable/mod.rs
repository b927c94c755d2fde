pub(crate) mod images;
pub(crate) mod records;

use reqwest::header::AUTHORIZATION;

use crate::error::{LeaderboardError, Result};
use crate::http;

/// GET a URL with a bearer token and decode the JSON body.
pub(crate) async fn get_json<T>(client: &reqwest::Client, url: reqwest::Url, api_key: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let display = url.to_string();
    let request = client
        .get(url)
        .header(AUTHORIZATION, format!("Bearer {api_key}"));
    let body = http::send(request, &display)
        .await?
        .text()
        .await
        .map_err(|e| LeaderboardError::ResponseBody {
            url: display.clone(),
            source: e,
        })?;

    serde_json::from_str(&body).map_err(|e| LeaderboardError::Decode {
        url: display,
        source: e,
    })
}
