// Live game status: which NFL teams are playing right now.
//
// A background task polls the scoreboard while a matchup view is open and
// publishes the latest set through a watch channel. Readers only ever see a
// complete snapshot.

pub mod scoreboard;
pub mod tracker;

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::FetchError;

pub use scoreboard::EspnScoreboard;
pub use tracker::{refresh_once, LiveStatusHandle};

/// Team abbreviations currently in an in-progress game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveTeams {
    pub teams: HashSet<String>,
    /// When the set was last replaced by a successful fetch.
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl LiveTeams {
    pub fn is_live(&self, team: &str) -> bool {
        self.teams.contains(team)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Anything that can report the teams currently playing.
#[async_trait]
pub trait ScoreboardSource: Send + Sync {
    async fn fetch_live_teams(&self) -> Result<HashSet<String>, FetchError>;
}
