// Sleeper read API: the fallible source trait, its HTTP implementation, and
// the degrading wrapper views use.

pub mod client;

use async_trait::async_trait;
use tracing::warn;

use crate::error::FetchError;
use crate::league::{League, MatchupRecord, NflState, PlayerTable, Roster, User, Week};

pub use client::{SleeperClient, DEFAULT_BASE_URL};

/// Read-only access to Sleeper league data.
///
/// Lookups of things that do not exist resolve to `None` or an empty list;
/// only transport, status and decode failures are errors.
#[async_trait]
pub trait SleeperSource: Send + Sync {
    async fn user(&self, username: &str) -> Result<Option<User>, FetchError>;

    async fn user_leagues(&self, user_id: &str, season: &str) -> Result<Vec<League>, FetchError>;

    async fn league(&self, league_id: &str) -> Result<Option<League>, FetchError>;

    async fn rosters(&self, league_id: &str) -> Result<Vec<Roster>, FetchError>;

    async fn users(&self, league_id: &str) -> Result<Vec<User>, FetchError>;

    async fn matchups(&self, league_id: &str, week: Week)
        -> Result<Vec<MatchupRecord>, FetchError>;

    async fn nfl_state(&self) -> Result<Option<NflState>, FetchError>;

    async fn players(&self) -> Result<PlayerTable, FetchError>;
}

/// Collapse a failed fetch into the empty value, logging what was lost.
pub fn or_empty<T: Default>(what: &str, result: Result<T, FetchError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to fetch {what}: {e}");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_empty_passes_values_and_swallows_errors() {
        assert_eq!(or_empty("rosters", Ok(vec![1, 2])), vec![1, 2]);
        let failed: Result<Vec<u32>, FetchError> = Err(FetchError::Status {
            url: "https://api.test/league/1/rosters".into(),
            status: 500,
        });
        assert!(or_empty("rosters", failed).is_empty());

        let missing: Result<Option<String>, FetchError> = Err(FetchError::Decode {
            url: "u".into(),
            message: "eof".into(),
        });
        assert_eq!(or_empty("league", missing), None);
    }
}
