// Player reference data and the closed set of scoring positions.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{first_present, null_as_default};

/// Football positions that can score in a lineup.
///
/// Anything the platform reports outside this set (IDP positions, missing
/// data) resolves to `Unknown`, which never satisfies a specific slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
    Kicker,
    Defense,
    #[default]
    Unknown,
}

impl Position {
    /// Parse a platform position string. Unrecognised strings yield `None`.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            "K" => Some(Position::Kicker),
            "DEF" => Some(Position::Defense),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Kicker => "K",
            Position::Defense => "DEF",
            Position::Unknown => "UNKNOWN",
        }
    }

    /// Whether this position may fill a FLEX slot.
    pub fn is_flex_eligible(&self) -> bool {
        matches!(
            self,
            Position::RunningBack | Position::WideReceiver | Position::TightEnd
        )
    }
}

impl From<Option<String>> for Position {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .and_then(Position::from_str_pos)
            .unwrap_or(Position::Unknown)
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        value.display_str().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// Reference data for a single NFL player (or team defense).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub position: Position,
    /// NFL team abbreviation; `None` for free agents.
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bye_weeks: Vec<u8>,
}

impl Player {
    /// Display name: full name, then "first last", then the raw id.
    pub fn display_name(&self) -> String {
        if let Some(full) = first_present([self.full_name.as_deref()]) {
            return full.to_string();
        }
        let first = first_present([self.first_name.as_deref()]);
        let last = first_present([self.last_name.as_deref()]);
        match (first, last) {
            (Some(f), Some(l)) => format!("{f} {l}"),
            (Some(n), None) | (None, Some(n)) => n.to_string(),
            (None, None) => self.player_id.clone(),
        }
    }

    /// Team abbreviation, or `FA` for free agents.
    pub fn team_label(&self) -> &str {
        first_present([self.team.as_deref()]).unwrap_or("FA")
    }

    /// Injury designation worth showing (anything other than healthy).
    pub fn injury_label(&self) -> Option<&str> {
        first_present([self.injury_status.as_deref()])
            .filter(|status| !status.eq_ignore_ascii_case("healthy"))
    }

    /// Whether the player's team is idle in the given week.
    pub fn is_on_bye(&self, week: u8) -> bool {
        self.bye_weeks.contains(&week)
    }
}

// ---------------------------------------------------------------------------
// PlayerTable
// ---------------------------------------------------------------------------

/// Bulk player reference table keyed by player id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PlayerTable {
    players: HashMap<String, Player>,
}

impl PlayerTable {
    pub fn new(players: HashMap<String, Player>) -> Self {
        PlayerTable { players }
    }

    pub fn get(&self, player_id: &str) -> Option<&Player> {
        self.players.get(player_id)
    }

    /// Resolve a player's position, `Unknown` when the player is missing.
    pub fn position_of(&self, player_id: &str) -> Position {
        self.get(player_id)
            .map(|p| p.position)
            .unwrap_or(Position::Unknown)
    }

    /// Team abbreviation for a player, if the player is known and rostered
    /// by an NFL team.
    pub fn team_of(&self, player_id: &str) -> Option<&str> {
        self.get(player_id)
            .and_then(|p| first_present([p.team.as_deref()]))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl FromIterator<Player> for PlayerTable {
    fn from_iter<T: IntoIterator<Item = Player>>(iter: T) -> Self {
        PlayerTable {
            players: iter
                .into_iter()
                .map(|p| (p.player_id.clone(), p))
                .collect(),
        }
    }
}
