// ESPN NFL scoreboard: the snapshot the live tracker polls.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::FetchError;
use crate::http::get_json;

use super::ScoreboardSource;

pub const DEFAULT_SCOREBOARD_URL: &str =
    "https://site.api.espn.com/apis/site/v2/sports/football/nfl/scoreboard";

/// Competition state reported while a game is being played.
const IN_PROGRESS: &str = "in";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// The slice of the scoreboard document the tracker reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scoreboard {
    #[serde(default)]
    pub events: Vec<ScoreboardEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreboardEvent {
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub status: Option<CompetitionStatus>,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompetitionStatus {
    #[serde(rename = "type", default)]
    pub kind: Option<StatusType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusType {
    /// `pre`, `in` or `post`.
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Competitor {
    #[serde(default)]
    pub team: Option<CompetitorTeam>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompetitorTeam {
    #[serde(default)]
    pub abbreviation: Option<String>,
}

impl Competition {
    fn in_progress(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.kind.as_ref())
            .and_then(|k| k.state.as_deref())
            == Some(IN_PROGRESS)
    }
}

/// Collect the teams of every in-progress game.
///
/// Only the first competition of each event is considered.
pub fn live_teams_from_scoreboard(scoreboard: &Scoreboard) -> HashSet<String> {
    scoreboard
        .events
        .iter()
        .filter_map(|event| event.competitions.first())
        .filter(|competition| competition.in_progress())
        .flat_map(|competition| &competition.competitors)
        .filter_map(|c| c.team.as_ref()?.abbreviation.clone())
        .filter(|abbr| !abbr.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// EspnScoreboard
// ---------------------------------------------------------------------------

/// Polls the public ESPN scoreboard.
pub struct EspnScoreboard {
    http: reqwest::Client,
    url: String,
}

impl EspnScoreboard {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ScoreboardSource for EspnScoreboard {
    async fn fetch_live_teams(&self) -> Result<HashSet<String>, FetchError> {
        let scoreboard: Scoreboard = get_json(&self.http, &self.url).await?;
        Ok(live_teams_from_scoreboard(&scoreboard))
    }
}
