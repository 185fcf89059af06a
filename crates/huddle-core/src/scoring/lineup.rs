// Effective lineups: which starters count for a roster this week.
//
// Standard leagues use the starters the manager set, with the platform's
// per-starter points. Best-ball leagues replace them with the optimizer's
// lineup. Either way the raw record is left untouched so other consumers
// (standings, roster views) keep seeing the platform's data.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::league::roster::EMPTY_SLOT_ID;
use crate::league::{League, MatchupRecord, PlayerTable, Roster};

use super::best_ball::optimize_lineup;
use super::requirements::PositionRequirements;

/// Resolve the lineup that counts for a matchup record.
///
/// Returns the record itself for standard leagues and a derived copy with
/// `starters`, `starters_points` and `points` replaced for best-ball leagues.
pub fn effective_matchup<'a>(
    record: &'a MatchupRecord,
    league: &League,
    players: &PlayerTable,
) -> Cow<'a, MatchupRecord> {
    if !league.is_best_ball() {
        return Cow::Borrowed(record);
    }

    let requirements = PositionRequirements::from_template(league.roster_positions.as_slice());
    let lineup = optimize_lineup(
        record.players.as_slice(),
        &record.players_points,
        players,
        &requirements,
    );

    Cow::Owned(MatchupRecord {
        starters: lineup.starters,
        starters_points: lineup.starters_points,
        points: lineup.total_points,
        ..record.clone()
    })
}

/// Resolve every record of a week, preserving input order.
pub fn effective_matchups(
    records: &[MatchupRecord],
    league: &League,
    players: &PlayerTable,
) -> Vec<MatchupRecord> {
    records
        .iter()
        .map(|r| effective_matchup(r, league, players).into_owned())
        .collect()
}

// ---------------------------------------------------------------------------
// Lineup breakdown for display
// ---------------------------------------------------------------------------

/// One player row in a matchup breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct LineupEntry {
    /// `None` for an empty starter slot.
    pub player_id: Option<String>,
    pub points: f64,
    /// Scored for this roster but no longer on it (dropped or traded).
    pub not_on_roster: bool,
    /// The player's team has a bye in the viewed week.
    pub on_bye: bool,
    /// The player's team is playing right now. Filled by the caller from the
    /// live status set.
    pub live: bool,
}

/// Starters and bench of an effective matchup record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineupBreakdown {
    pub starters: Vec<LineupEntry>,
    pub bench: Vec<LineupEntry>,
}

impl LineupBreakdown {
    /// Build the breakdown of an (already effective) matchup record.
    ///
    /// `roster` is the roster's current state, used for the not-on-roster
    /// flag; when it is unknown no player is flagged.
    pub fn build(
        record: &MatchupRecord,
        roster: Option<&Roster>,
        players: &PlayerTable,
        week: u8,
    ) -> Self {
        let current: Option<HashSet<&str>> = roster.map(Roster::player_set);
        let entry = |id: &str, points: f64| LineupEntry {
            player_id: Some(id.to_string()),
            points,
            not_on_roster: current.as_ref().is_some_and(|set| {
                record.players_points.contains_key(id) && !set.contains(id)
            }),
            on_bye: players.get(id).is_some_and(|p| p.is_on_bye(week)),
            live: false,
        };

        let starters = record
            .starters
            .iter()
            .enumerate()
            .map(|(slot, id)| {
                if id.is_empty() || id == EMPTY_SLOT_ID {
                    LineupEntry {
                        player_id: None,
                        points: 0.0,
                        not_on_roster: false,
                        on_bye: false,
                        live: false,
                    }
                } else {
                    entry(id.as_str(), record.starter_points(slot))
                }
            })
            .collect();

        let starter_ids: HashSet<&str> = record.starters.iter().map(String::as_str).collect();
        let bench = record
            .players
            .iter()
            .filter(|id| !starter_ids.contains(id.as_str()))
            .map(|id| entry(id.as_str(), record.player_points(id)))
            .collect();

        LineupBreakdown { starters, bench }
    }

    /// Set the live flag on every entry whose team is currently playing.
    pub fn mark_live<F>(&mut self, players: &PlayerTable, is_live: F)
    where
        F: Fn(&str) -> bool,
    {
        for entry in self.starters.iter_mut().chain(self.bench.iter_mut()) {
            entry.live = entry
                .player_id
                .as_deref()
                .and_then(|id| players.team_of(id))
                .is_some_and(&is_live);
        }
    }
}
