// Messages exchanged between the app orchestrator and the TUI, and the
// display-ready snapshots they carry.
//
// Snapshots hold resolved labels and formatted values only, so the TUI never
// needs the player table or the raw league records.

use chrono::{DateTime, Utc};
use huddle_core::league::Week;

// ---------------------------------------------------------------------------
// Commands (TUI -> app)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    Quit,
    /// The active tab changed; the app starts or stops live tracking.
    SwitchTab(TabId),
    NextWeek,
    PrevWeek,
    /// Refetch the current league and week.
    Reload,
    /// Open a league chosen from the picker.
    OpenLeague(String),
    /// Look up a user's leagues by name, remembering the name.
    LookupUser(String),
    /// Ask for a different username.
    ChangeUser,
    /// Go back to the league picker of the current user.
    ShowLeagues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabId {
    #[default]
    Standings,
    Matchups,
}

impl TabId {
    pub fn label(self) -> &'static str {
        match self {
            TabId::Standings => "Standings",
            TabId::Matchups => "Matchups",
        }
    }
}

// ---------------------------------------------------------------------------
// Updates (app -> TUI)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// A fetch started; the previous data stays on screen until it lands.
    Loading(String),
    LeagueLoaded(Box<LeagueSnapshot>),
    WeekLoaded(Box<WeekSnapshot>),
    /// Leagues of the current user, for the picker.
    LeagueChoices(Vec<LeagueChoice>),
    /// Open username entry, prefilled with the remembered name.
    PromptUsername(Option<String>),
    LiveStatus(LiveSummary),
    /// A one-line message for the status bar.
    Notice(String),
}

/// One league in the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueChoice {
    pub league_id: String,
    pub name: String,
    pub season: String,
    pub best_ball: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveSummary {
    pub teams_playing: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// League snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueSnapshot {
    pub league_id: String,
    pub name: String,
    pub season: String,
    pub best_ball: bool,
    pub standings: Vec<StandingsLine>,
}

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsLine {
    pub rank: usize,
    pub team: String,
    /// Owner name, shown only when the team has its own name.
    pub owner: Option<String>,
    pub record: String,
    pub win_pct: f64,
    pub points_for: f64,
    pub points_against: f64,
}

// ---------------------------------------------------------------------------
// Week snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekSnapshot {
    pub week: Week,
    pub cards: Vec<MatchupCard>,
}

/// A head-to-head matchup or a bye, leader first.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupCard {
    pub matchup_id: Option<u32>,
    pub leader: TeamScore,
    /// `None` for a bye.
    pub trailer: Option<TeamScore>,
    pub winner: Option<u32>,
    pub tie: bool,
}

impl MatchupCard {
    pub fn is_bye(&self) -> bool {
        self.trailer.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamScore {
    pub roster_id: u32,
    pub team: String,
    pub owner: Option<String>,
    pub points: f64,
    pub starters: Vec<PlayerLine>,
    pub bench: Vec<PlayerLine>,
}

impl TeamScore {
    /// Starters whose team is playing right now.
    pub fn live_starters(&self) -> usize {
        self.starters.iter().filter(|p| p.live).count()
    }
}

/// One player row in the matchup detail.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLine {
    /// `None` for an empty starter slot.
    pub name: Option<String>,
    pub position: String,
    pub team: String,
    pub injury: Option<String>,
    pub points: f64,
    pub not_on_roster: bool,
    pub on_bye: bool,
    pub live: bool,
}
