// HTTP client for the public Sleeper v1 API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::http::get_json;
use crate::league::{League, MatchupRecord, NflState, PlayerTable, Roster, User, Week};

use super::SleeperSource;

pub const DEFAULT_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Sleeper API client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: reqwest::Client,
    base_url: String,
}

impl SleeperClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path (which starts with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path whose body may be JSON `null`.
    async fn get_nullable<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, FetchError> {
        get_json(&self.http, &self.url(path)).await
    }

    /// GET a path, treating a `null` body as the empty value.
    async fn get_or_default<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T, FetchError> {
        Ok(self.get_nullable(path).await?.unwrap_or_default())
    }
}

#[async_trait]
impl SleeperSource for SleeperClient {
    async fn user(&self, username: &str) -> Result<Option<User>, FetchError> {
        self.get_nullable(&format!("/user/{}", username.trim())).await
    }

    async fn user_leagues(&self, user_id: &str, season: &str) -> Result<Vec<League>, FetchError> {
        self.get_or_default(&format!("/user/{user_id}/leagues/nfl/{season}"))
            .await
    }

    async fn league(&self, league_id: &str) -> Result<Option<League>, FetchError> {
        self.get_nullable(&format!("/league/{league_id}")).await
    }

    async fn rosters(&self, league_id: &str) -> Result<Vec<Roster>, FetchError> {
        self.get_or_default(&format!("/league/{league_id}/rosters"))
            .await
    }

    async fn users(&self, league_id: &str) -> Result<Vec<User>, FetchError> {
        self.get_or_default(&format!("/league/{league_id}/users"))
            .await
    }

    async fn matchups(
        &self,
        league_id: &str,
        week: Week,
    ) -> Result<Vec<MatchupRecord>, FetchError> {
        self.get_or_default(&format!("/league/{league_id}/matchups/{week}"))
            .await
    }

    async fn nfl_state(&self) -> Result<Option<NflState>, FetchError> {
        self.get_nullable("/state/nfl").await
    }

    async fn players(&self) -> Result<PlayerTable, FetchError> {
        self.get_or_default("/players/nfl").await
    }
}
