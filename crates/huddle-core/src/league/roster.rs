// Season rosters: player sets, configured starters and cumulative record.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Sleeper's placeholder id for an empty starter slot.
pub const EMPTY_SLOT_ID: &str = "0";

/// A league member's roster for the season.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: u32,
    /// The owning user; `None` for orphaned rosters.
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<String>,
    /// Configured starters, slot-positional (index = lineup slot).
    #[serde(default, deserialize_with = "null_as_default")]
    pub starters: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: RosterSettings,
}

/// Cumulative season record. Point totals are split into a whole part and a
/// hundredths part by the platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub fpts: i64,
    #[serde(default)]
    pub fpts_decimal: i64,
    #[serde(default)]
    pub fpts_against: i64,
    #[serde(default)]
    pub fpts_against_decimal: i64,
}

/// A point total stored as whole points plus hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Points {
    pub whole: i64,
    pub hundredths: i64,
}

impl Points {
    pub fn new(whole: i64, hundredths: i64) -> Self {
        Points { whole, hundredths }
    }

    /// Combine both components into a single decimal value.
    pub fn value(self) -> f64 {
        self.whole as f64 + self.hundredths as f64 / 100.0
    }
}

impl RosterSettings {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Wins over games played; 0.0 when no games have been played.
    pub fn win_pct(&self) -> f64 {
        match self.games_played() {
            0 => 0.0,
            games => self.wins as f64 / games as f64,
        }
    }

    pub fn points_for(&self) -> Points {
        Points::new(self.fpts, self.fpts_decimal)
    }

    pub fn points_against(&self) -> Points {
        Points::new(self.fpts_against, self.fpts_against_decimal)
    }

    /// `W-L`, or `W-L-T` once the roster has a tie.
    pub fn record_label(&self) -> String {
        if self.ties > 0 {
            format!("{}-{}-{}", self.wins, self.losses, self.ties)
        } else {
            format!("{}-{}", self.wins, self.losses)
        }
    }
}

impl Roster {
    /// The roster's current player ids as a set, for membership checks.
    pub fn player_set(&self) -> HashSet<&str> {
        self.players.iter().map(String::as_str).collect()
    }
}
