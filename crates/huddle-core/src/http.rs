// Shared HTTP plumbing for the read-only clients.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Build the HTTP client shared by the Sleeper and scoreboard sources.
pub fn build_client(user_agent: Option<&str>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder().timeout(REQUEST_TIMEOUT);
    if let Some(agent) = user_agent {
        builder = builder.user_agent(agent.to_string());
    }
    builder.build()
}

/// GET `url` and decode the JSON body.
///
/// Transport failures, non-success statuses and undecodable bodies each map to
/// their own `FetchError` variant.
pub async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
) -> Result<T, FetchError> {
    debug!("GET {url}");
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    decode_body(url, &body)
}

/// Decode a response body, naming the URL in the error.
pub fn decode_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}
