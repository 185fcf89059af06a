// Conversion of core views into display snapshots for the TUI.

use huddle_core::league::{League, PlayerTable};
use huddle_core::live::LiveTeams;
use huddle_core::scoring::{LineupEntry, MatchupPairing, Side};
use huddle_core::view::{LeagueView, WeekView};

use crate::protocol::{
    LeagueChoice, LeagueSnapshot, LiveSummary, MatchupCard, PlayerLine, StandingsLine,
    TeamScore, WeekSnapshot,
};

pub fn league_snapshot(view: &LeagueView) -> LeagueSnapshot {
    let standings = view
        .standings
        .iter()
        .map(|row| {
            let owner = view.owner(row.roster_id);
            StandingsLine {
                rank: row.rank,
                team: view.team_label(row.roster_id).to_string(),
                owner: owner.and_then(|u| u.owner_label()).map(String::from),
                record: row.record.clone(),
                win_pct: row.win_pct,
                points_for: row.points_for.value(),
                points_against: row.points_against.value(),
            }
        })
        .collect();

    LeagueSnapshot {
        league_id: view.league_id.clone(),
        name: view.name().to_string(),
        season: view
            .league
            .as_ref()
            .map(|l| l.season.clone())
            .unwrap_or_default(),
        best_ball: view.is_best_ball(),
        standings,
    }
}

pub fn week_snapshot(
    week: &WeekView,
    league: &LeagueView,
    players: &PlayerTable,
    live: &LiveTeams,
) -> WeekSnapshot {
    let cards = week
        .pairings
        .iter()
        .map(|pairing| {
            let team = |side: &Side| team_score(side, week, league, players, live);
            match pairing {
                MatchupPairing::Bye { matchup_id, team: side } => MatchupCard {
                    matchup_id: *matchup_id,
                    leader: team(side),
                    trailer: None,
                    winner: None,
                    tie: false,
                },
                MatchupPairing::HeadToHead {
                    matchup_id,
                    leader,
                    trailer,
                } => MatchupCard {
                    matchup_id: *matchup_id,
                    leader: team(leader),
                    trailer: Some(team(trailer)),
                    winner: pairing.winner(),
                    tie: pairing.is_tie(),
                },
            }
        })
        .collect();

    WeekSnapshot {
        week: week.week,
        cards,
    }
}

fn team_score(
    side: &Side,
    week: &WeekView,
    league: &LeagueView,
    players: &PlayerTable,
    live: &LiveTeams,
) -> TeamScore {
    let owner = league.owner(side.roster_id);
    let breakdown = week
        .breakdown(side.roster_id, league, players, live)
        .unwrap_or_default();

    TeamScore {
        roster_id: side.roster_id,
        team: league.team_label(side.roster_id).to_string(),
        owner: owner.and_then(|u| u.owner_label()).map(String::from),
        points: side.points,
        starters: breakdown
            .starters
            .iter()
            .map(|e| player_line(e, players))
            .collect(),
        bench: breakdown
            .bench
            .iter()
            .map(|e| player_line(e, players))
            .collect(),
    }
}

fn player_line(entry: &LineupEntry, players: &PlayerTable) -> PlayerLine {
    let Some(id) = entry.player_id.as_deref() else {
        return PlayerLine {
            name: None,
            position: String::new(),
            team: String::new(),
            injury: None,
            points: 0.0,
            not_on_roster: false,
            on_bye: false,
            live: false,
        };
    };

    let player = players.get(id);
    PlayerLine {
        name: Some(player.map_or_else(|| id.to_string(), |p| p.display_name())),
        position: players.position_of(id).display_str().to_string(),
        team: player.map_or("FA", |p| p.team_label()).to_string(),
        injury: player.and_then(|p| p.injury_label()).map(String::from),
        points: entry.points,
        not_on_roster: entry.not_on_roster,
        on_bye: entry.on_bye,
        live: entry.live,
    }
}

pub fn league_choice(league: &League) -> LeagueChoice {
    LeagueChoice {
        league_id: league.league_id.clone(),
        name: if league.name.is_empty() {
            league.league_id.clone()
        } else {
            league.name.clone()
        },
        season: league.season.clone(),
        best_ball: league.is_best_ball(),
    }
}

pub fn live_summary(live: &LiveTeams) -> LiveSummary {
    LiveSummary {
        teams_playing: live.len(),
        refreshed_at: live.refreshed_at,
    }
}
