// View assembly: fetch everything a screen needs in one go and derive the
// engine's outputs from it.
//
// Each fetch lands in its own field. One failing (or returning nothing) never
// prevents the others from being shown.

use chrono::{Datelike, Utc};
use tracing::info;

use crate::league::user::team_label;
use crate::league::{League, MatchupRecord, NflState, PlayerTable, Roster, User, Week};
use crate::live::LiveTeams;
use crate::scoring::{
    effective_matchups, group_matchups, rank_standings, LineupBreakdown, MatchupPairing,
    StandingsRow,
};
use crate::sleeper::{or_empty, SleeperSource};

// ---------------------------------------------------------------------------
// User leagues
// ---------------------------------------------------------------------------

/// A user and the leagues they play in this season.
#[derive(Debug, Clone, Default)]
pub struct UserLeagues {
    /// `None` when no such user exists (or the lookup failed).
    pub user: Option<User>,
    pub season: String,
    pub leagues: Vec<League>,
}

impl UserLeagues {
    pub async fn load(source: &dyn SleeperSource, username: &str) -> Self {
        let (state, user) = tokio::join!(source.nfl_state(), source.user(username));
        let season = or_empty("NFL state", state)
            .map(|s| s.season)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Utc::now().year().to_string());

        let Some(user) = or_empty("user", user) else {
            info!("No Sleeper user named {username:?}");
            return UserLeagues {
                user: None,
                season,
                leagues: Vec::new(),
            };
        };

        let leagues = or_empty("user leagues", source.user_leagues(&user.user_id, &season).await);
        UserLeagues {
            user: Some(user),
            season,
            leagues,
        }
    }

    /// The league to open directly, when the user has exactly one.
    pub fn only_league(&self) -> Option<&League> {
        match self.leagues.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// League view
// ---------------------------------------------------------------------------

/// League-level data: settings, rosters, members and standings.
#[derive(Debug, Clone, Default)]
pub struct LeagueView {
    pub league_id: String,
    pub league: Option<League>,
    pub rosters: Vec<Roster>,
    pub users: Vec<User>,
    pub nfl_state: Option<NflState>,
    pub standings: Vec<StandingsRow>,
}

impl LeagueView {
    /// Fetch league, rosters, members and NFL state concurrently.
    pub async fn load(source: &dyn SleeperSource, league_id: &str) -> Self {
        let (league, rosters, users, nfl_state) = tokio::join!(
            source.league(league_id),
            source.rosters(league_id),
            source.users(league_id),
            source.nfl_state(),
        );

        Self::assemble(
            league_id,
            or_empty("league", league),
            or_empty("rosters", rosters),
            or_empty("league users", users),
            or_empty("NFL state", nfl_state),
        )
    }

    /// Derive standings from already-fetched parts.
    pub fn assemble(
        league_id: &str,
        league: Option<League>,
        rosters: Vec<Roster>,
        users: Vec<User>,
        nfl_state: Option<NflState>,
    ) -> Self {
        let standings = rank_standings(&rosters);
        Self {
            league_id: league_id.to_string(),
            league,
            rosters,
            users,
            nfl_state,
            standings,
        }
    }

    /// League name, falling back to its id.
    pub fn name(&self) -> &str {
        self.league
            .as_ref()
            .map(|l| l.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.league_id)
    }

    pub fn is_best_ball(&self) -> bool {
        self.league.as_ref().is_some_and(League::is_best_ball)
    }

    /// The week to open when none was requested.
    pub fn default_week(&self) -> Week {
        self.nfl_state
            .as_ref()
            .map(NflState::default_week)
            .unwrap_or_default()
    }

    pub fn roster(&self, roster_id: u32) -> Option<&Roster> {
        self.rosters.iter().find(|r| r.roster_id == roster_id)
    }

    /// The member owning a roster, if known.
    pub fn owner(&self, roster_id: u32) -> Option<&User> {
        let owner_id = self.roster(roster_id)?.owner_id.as_deref()?;
        self.users.iter().find(|u| u.user_id == owner_id)
    }

    /// Primary display label for a roster.
    pub fn team_label(&self, roster_id: u32) -> &str {
        team_label(self.owner(roster_id))
    }
}

// ---------------------------------------------------------------------------
// Week view
// ---------------------------------------------------------------------------

/// One week's matchups, with best-ball lineups already applied.
#[derive(Debug, Clone, Default)]
pub struct WeekView {
    pub week: Week,
    /// Effective records in platform order.
    pub matchups: Vec<MatchupRecord>,
    pub pairings: Vec<MatchupPairing>,
}

impl WeekView {
    pub async fn load(
        source: &dyn SleeperSource,
        league_id: &str,
        league: Option<&League>,
        week: Week,
        players: &PlayerTable,
    ) -> Self {
        let records = or_empty("matchups", source.matchups(league_id, week).await);
        Self::from_records(week, &records, league, players)
    }

    /// Resolve lineups and pairings for raw records.
    ///
    /// An unknown league is treated as a standard one.
    pub fn from_records(
        week: Week,
        records: &[MatchupRecord],
        league: Option<&League>,
        players: &PlayerTable,
    ) -> Self {
        let matchups = match league {
            Some(league) => effective_matchups(records, league, players),
            None => records.to_vec(),
        };
        let pairings = group_matchups(&matchups);
        Self {
            week,
            matchups,
            pairings,
        }
    }

    pub fn record(&self, roster_id: u32) -> Option<&MatchupRecord> {
        self.matchups.iter().find(|r| r.roster_id == roster_id)
    }

    /// Starters and bench for one roster, annotated with live status.
    pub fn breakdown(
        &self,
        roster_id: u32,
        league: &LeagueView,
        players: &PlayerTable,
        live: &LiveTeams,
    ) -> Option<LineupBreakdown> {
        let record = self.record(roster_id)?;
        let mut breakdown =
            LineupBreakdown::build(record, league.roster(roster_id), players, self.week.number());
        breakdown.mark_live(players, |team| live.is_live(team));
        Some(breakdown)
    }
}

/// Fetch the bulk player table, empty on failure.
pub async fn load_players(source: &dyn SleeperSource) -> PlayerTable {
    let players = or_empty("players", source.players().await);
    info!("Loaded {} players", players.len());
    players
}
