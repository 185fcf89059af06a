// Typed Sleeper records: leagues, rosters, users, matchups, players.
//
// The upstream JSON is loosely shaped (nulls where arrays are expected,
// open-ended metadata bags). Everything is normalised at deserialization time
// so the scoring engine only ever sees plain values.

pub mod matchup;
pub mod player;
pub mod roster;
pub mod user;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::WeekError;

pub use matchup::MatchupRecord;
pub use player::{Player, PlayerTable, Position};
pub use roster::{Points, Roster, RosterSettings};
pub use user::User;

// ---------------------------------------------------------------------------
// League
// ---------------------------------------------------------------------------

/// A fantasy league and its lineup configuration for the season.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct League {
    pub league_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_rosters: Option<u32>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: LeagueSettings,
    /// Numeric scoring rules keyed by stat (e.g. `pass_td`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub scoring_settings: HashMap<String, f64>,
    /// Ordered lineup template, one token per starting slot (plus `BN` slots).
    #[serde(default, deserialize_with = "null_as_default")]
    pub roster_positions: Vec<String>,
}

/// The subset of league settings the engine reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueSettings {
    /// `Some(1)` for best-ball leagues; absent or anything else for standard.
    #[serde(default)]
    pub best_ball: Option<u8>,
    #[serde(default)]
    pub num_teams: Option<u32>,
    #[serde(default)]
    pub playoff_week_start: Option<u32>,
}

impl League {
    /// Whether starters are picked automatically from the highest scorers.
    pub fn is_best_ball(&self) -> bool {
        self.settings.best_ball == Some(1)
    }
}

// ---------------------------------------------------------------------------
// NFL state
// ---------------------------------------------------------------------------

/// The platform-wide "current NFL state".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NflState {
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub week: u32,
    #[serde(default)]
    pub season_type: Option<String>,
}

impl NflState {
    /// The week a view should open on when none was requested.
    ///
    /// The platform reports week 0 during the preseason and can run past the
    /// regular season, so the value is clamped into the valid range.
    pub fn default_week(&self) -> Week {
        Week::clamped(self.week)
    }
}

// ---------------------------------------------------------------------------
// Week
// ---------------------------------------------------------------------------

/// A regular-season week number, always within `1..=18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Week(u8);

impl Week {
    pub const FIRST: Week = Week(1);
    pub const LAST: Week = Week(18);

    /// Validate a raw week number.
    pub fn new(week: u32) -> Result<Self, WeekError> {
        if (1..=18).contains(&week) {
            Ok(Week(week as u8))
        } else {
            Err(WeekError(week))
        }
    }

    /// Clamp a raw week number into range.
    pub fn clamped(week: u32) -> Self {
        Week(week.clamp(1, 18) as u8)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// The following week, or `None` after the last one.
    pub fn next(self) -> Option<Week> {
        (self < Week::LAST).then(|| Week(self.0 + 1))
    }

    /// The preceding week, or `None` before the first one.
    pub fn prev(self) -> Option<Week> {
        (self > Week::FIRST).then(|| Week(self.0 - 1))
    }
}

impl Default for Week {
    fn default() -> Self {
        Week::FIRST
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

/// Deserialize a field that the upstream sometimes sends as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Return the first candidate that is present and non-empty.
///
/// Display fallbacks are written as ordered chains of these, so an empty
/// string from the upstream is skipped the same way a missing value is.
pub fn first_present<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_ball_flag_detection() {
        let mut league = League::default();
        assert!(!league.is_best_ball());
        league.settings.best_ball = Some(0);
        assert!(!league.is_best_ball());
        league.settings.best_ball = Some(1);
        assert!(league.is_best_ball());
    }

    #[test]
    fn league_deserializes_with_nulls_and_missing_fields() {
        let json = r#"{
            "league_id": "784",
            "name": "Dynasty",
            "season": "2024",
            "settings": { "best_ball": 1, "num_teams": 12 },
            "scoring_settings": null,
            "roster_positions": ["QB", "RB", "RB", "FLEX", "BN"]
        }"#;
        let league: League = serde_json::from_str(json).unwrap();
        assert!(league.is_best_ball());
        assert!(league.scoring_settings.is_empty());
        assert_eq!(league.roster_positions.len(), 5);
        assert_eq!(league.settings.num_teams, Some(12));
    }

    #[test]
    fn week_validation() {
        assert!(Week::new(0).is_err());
        assert_eq!(Week::new(1).unwrap().number(), 1);
        assert_eq!(Week::new(18).unwrap().number(), 18);
        assert_eq!(Week::new(19), Err(WeekError(19)));
    }

    #[test]
    fn week_navigation_stops_at_bounds() {
        assert_eq!(Week::FIRST.prev(), None);
        assert_eq!(Week::LAST.next(), None);
        assert_eq!(Week::FIRST.next(), Some(Week::clamped(2)));
        assert_eq!(Week::LAST.prev(), Some(Week::clamped(17)));
    }

    #[test]
    fn default_week_clamps_preseason_and_postseason() {
        let preseason = NflState { season: "2025".into(), week: 0, season_type: None };
        assert_eq!(preseason.default_week(), Week::FIRST);
        let post = NflState { season: "2025".into(), week: 21, season_type: None };
        assert_eq!(post.default_week(), Week::LAST);
        let mid = NflState { season: "2025".into(), week: 7, season_type: None };
        assert_eq!(mid.default_week().number(), 7);
    }

    #[test]
    fn first_present_skips_missing_and_empty() {
        assert_eq!(first_present([None, Some(""), Some("b")]), Some("b"));
        assert_eq!(first_present([Some("  "), None]), None);
        assert_eq!(first_present([Some("a"), Some("b")]), Some("a"));
    }
}
