// Matchup pairing: group a week's records into head-to-head matchups and byes.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::warn;

use crate::league::MatchupRecord;

/// One roster's side of a pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Side {
    pub roster_id: u32,
    pub points: f64,
}

impl Side {
    fn of(record: &MatchupRecord) -> Self {
        Side {
            roster_id: record.roster_id,
            points: record.points,
        }
    }
}

/// A grouped matchup for the week.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchupPairing {
    /// A roster without an opponent this week.
    Bye { matchup_id: Option<u32>, team: Side },
    /// Two rosters facing each other, higher score first.
    HeadToHead {
        matchup_id: Option<u32>,
        leader: Side,
        trailer: Side,
    },
}

impl MatchupPairing {
    pub fn matchup_id(&self) -> Option<u32> {
        match self {
            MatchupPairing::Bye { matchup_id, .. } | MatchupPairing::HeadToHead { matchup_id, .. } => {
                *matchup_id
            }
        }
    }

    /// The winning roster, `None` for byes and exact ties.
    pub fn winner(&self) -> Option<u32> {
        match self {
            MatchupPairing::Bye { .. } => None,
            MatchupPairing::HeadToHead { leader, trailer, .. } => {
                (leader.points > trailer.points).then_some(leader.roster_id)
            }
        }
    }

    pub fn is_tie(&self) -> bool {
        match self {
            MatchupPairing::Bye { .. } => false,
            MatchupPairing::HeadToHead { leader, trailer, .. } => leader.points == trailer.points,
        }
    }
}

/// Group records by pairing id.
///
/// Groups come out in ascending pairing id; records with no pairing id are
/// each a bye of their own, after the numbered groups. Within a group the
/// records are ordered by score, highest first, ties keeping input order.
pub fn group_matchups(records: &[MatchupRecord]) -> Vec<MatchupPairing> {
    let mut groups: BTreeMap<u32, Vec<&MatchupRecord>> = BTreeMap::new();
    let mut unpaired: Vec<&MatchupRecord> = Vec::new();

    for record in records {
        match record.matchup_id {
            Some(id) => groups.entry(id).or_default().push(record),
            None => unpaired.push(record),
        }
    }

    let mut pairings: Vec<MatchupPairing> = groups
        .into_iter()
        .filter_map(|(id, mut members)| {
            members.sort_by(|a, b| b.points.partial_cmp(&a.points).unwrap_or(Ordering::Equal));
            if members.len() > 2 {
                warn!(
                    "matchup {} has {} rosters, keeping the top two",
                    id,
                    members.len()
                );
            }
            match members.as_slice() {
                [] => None,
                [only] => Some(MatchupPairing::Bye {
                    matchup_id: Some(id),
                    team: Side::of(only),
                }),
                [first, second, ..] => Some(MatchupPairing::HeadToHead {
                    matchup_id: Some(id),
                    leader: Side::of(first),
                    trailer: Side::of(second),
                }),
            }
        })
        .collect();

    pairings.extend(unpaired.into_iter().map(|record| MatchupPairing::Bye {
        matchup_id: None,
        team: Side::of(record),
    }));

    pairings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(matchup_id: Option<u32>, roster_id: u32, points: f64) -> MatchupRecord {
        MatchupRecord {
            matchup_id,
            roster_id,
            points,
            ..MatchupRecord::default()
        }
    }

    /// Roster ids taking part, higher score first.
    fn roster_ids(pairing: &MatchupPairing) -> Vec<u32> {
        match pairing {
            MatchupPairing::Bye { team, .. } => vec![team.roster_id],
            MatchupPairing::HeadToHead { leader, trailer, .. } => {
                vec![leader.roster_id, trailer.roster_id]
            }
        }
    }

    #[test]
    fn pairs_by_id_in_ascending_order_with_winners() {
        let records = vec![
            record(Some(2), 1, 80.0),
            record(Some(1), 2, 95.5),
            record(Some(2), 3, 101.2),
            record(Some(1), 4, 88.0),
        ];
        let pairings = group_matchups(&records);

        assert_eq!(pairings.len(), 2);
        assert_eq!(pairings[0].matchup_id(), Some(1));
        assert_eq!(roster_ids(&pairings[0]), vec![2, 4]);
        assert_eq!(pairings[0].winner(), Some(2));
        assert_eq!(pairings[1].matchup_id(), Some(2));
        assert_eq!(roster_ids(&pairings[1]), vec![3, 1]);
        assert_eq!(pairings[1].winner(), Some(3));
    }

    #[test]
    fn single_member_group_is_a_bye() {
        let pairings = group_matchups(&[record(Some(3), 7, 64.0)]);
        assert_eq!(
            pairings,
            vec![MatchupPairing::Bye {
                matchup_id: Some(3),
                team: Side {
                    roster_id: 7,
                    points: 64.0
                },
            }]
        );
        assert_eq!(pairings[0].winner(), None);
        assert!(!pairings[0].is_tie());
    }

    #[test]
    fn exact_tie_has_no_winner_and_keeps_input_order() {
        let pairings = group_matchups(&[record(Some(1), 5, 90.0), record(Some(1), 6, 90.0)]);
        assert!(pairings[0].is_tie());
        assert_eq!(pairings[0].winner(), None);
        assert_eq!(roster_ids(&pairings[0]), vec![5, 6]);
    }

    #[test]
    fn signed_zero_scores_are_a_tie_in_input_order() {
        let pairings = group_matchups(&[record(Some(2), 7, -0.0), record(Some(2), 8, 0.0)]);
        assert!(pairings[0].is_tie());
        assert_eq!(roster_ids(&pairings[0]), vec![7, 8]);
    }

    #[test]
    fn records_without_id_become_byes_after_numbered_groups() {
        let records = vec![
            record(None, 9, 12.0),
            record(Some(4), 1, 50.0),
            record(Some(4), 2, 60.0),
            record(None, 10, 30.0),
        ];
        let pairings = group_matchups(&records);
        assert_eq!(pairings.len(), 3);
        assert_eq!(pairings[0].matchup_id(), Some(4));
        assert!(matches!(pairings[1], MatchupPairing::Bye { matchup_id: None, .. }));
        assert_eq!(roster_ids(&pairings[1]), vec![9]);
        assert_eq!(roster_ids(&pairings[2]), vec![10]);
    }

    #[test]
    fn oversized_group_keeps_top_two() {
        let records = vec![
            record(Some(1), 1, 10.0),
            record(Some(1), 2, 30.0),
            record(Some(1), 3, 20.0),
        ];
        let pairings = group_matchups(&records);
        assert_eq!(pairings.len(), 1);
        assert_eq!(roster_ids(&pairings[0]), vec![2, 3]);
    }

    #[test]
    fn no_records_no_pairings() {
        assert!(group_matchups(&[]).is_empty());
    }
}
