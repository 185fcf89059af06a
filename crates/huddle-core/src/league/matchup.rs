// Weekly per-roster matchup records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One roster's side of a week's matchup, as reported by the platform.
///
/// `starters_points[i]` belongs to `starters[i]`; `starters` is a subset of
/// the keys of `players_points`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupRecord {
    /// Shared by the rosters facing each other this week. A roster on a bye
    /// has a pairing id of its own, or none at all.
    #[serde(default)]
    pub matchup_id: Option<u32>,
    pub roster_id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: f64,
    /// The roster's full player pool for the week.
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starters: Vec<String>,
    /// Per-player scores; unplayed or inactive players may be missing.
    #[serde(default, deserialize_with = "null_as_default")]
    pub players_points: HashMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starters_points: Vec<f64>,
}

impl MatchupRecord {
    /// Score for a player this week, zero when the platform has none.
    pub fn player_points(&self, player_id: &str) -> f64 {
        self.players_points.get(player_id).copied().unwrap_or(0.0)
    }

    /// Score recorded for the starter in `slot`, zero when absent.
    pub fn starter_points(&self, slot: usize) -> f64 {
        self.starters_points.get(slot).copied().unwrap_or(0.0)
    }
}
