// Error types shared by the Sleeper and ESPN read clients.

use thiserror::Error;

/// A failed read against an external source.
///
/// None of these are fatal: callers log them and fall back to an empty or
/// previously-known value.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    /// The URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }
}

/// A week number outside the regular NFL range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("week {0} is outside 1..=18")]
pub struct WeekError(pub u32);
