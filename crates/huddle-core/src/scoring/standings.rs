// League standings from cumulative roster records.

use crate::league::{Points, Roster};

/// One ranked row of the standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsRow {
    /// 1-based position in the table.
    pub rank: usize,
    pub roster_id: u32,
    pub owner_id: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// `W-L`, or `W-L-T` when the roster has ties.
    pub record: String,
    pub win_pct: f64,
    pub points_for: Points,
    pub points_against: Points,
}

/// Rank rosters by win percentage, then points for, both descending.
///
/// Rosters equal on both keys keep their input order.
pub fn rank_standings(rosters: &[Roster]) -> Vec<StandingsRow> {
    let mut ordered: Vec<&Roster> = rosters.iter().collect();
    ordered.sort_by(|a, b| {
        b.settings
            .win_pct()
            .total_cmp(&a.settings.win_pct())
            .then_with(|| {
                b.settings
                    .points_for()
                    .value()
                    .total_cmp(&a.settings.points_for().value())
            })
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, roster)| {
            let s = &roster.settings;
            StandingsRow {
                rank: i + 1,
                roster_id: roster.roster_id,
                owner_id: roster.owner_id.clone(),
                wins: s.wins,
                losses: s.losses,
                ties: s.ties,
                record: s.record_label(),
                win_pct: s.win_pct(),
                points_for: s.points_for(),
                points_against: s.points_against(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::RosterSettings;

    fn roster(id: u32, wins: u32, losses: u32, ties: u32, fpts: i64, decimal: i64) -> Roster {
        Roster {
            roster_id: id,
            owner_id: Some(format!("owner{id}")),
            settings: RosterSettings {
                wins,
                losses,
                ties,
                fpts,
                fpts_decimal: decimal,
                ..RosterSettings::default()
            },
            ..Roster::default()
        }
    }

    fn ids(rows: &[StandingsRow]) -> Vec<u32> {
        rows.iter().map(|r| r.roster_id).collect()
    }

    #[test]
    fn orders_by_win_pct_then_points() {
        let rosters = vec![
            roster(1, 5, 3, 0, 900, 0),
            roster(2, 6, 2, 0, 850, 0),
            roster(3, 5, 3, 0, 910, 0),
        ];
        let rows = rank_standings(&rosters);
        assert_eq!(ids(&rows), vec![2, 3, 1]);
        assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn hundredths_break_ties_on_whole_points() {
        let rows = rank_standings(&[roster(1, 4, 4, 0, 800, 12), roster(2, 4, 4, 0, 800, 50)]);
        assert_eq!(ids(&rows), vec![2, 1]);
        assert_eq!(rows[0].points_for.value(), 800.5);
    }

    #[test]
    fn no_games_played_ranks_as_zero_pct() {
        let rows = rank_standings(&[roster(1, 0, 0, 0, 0, 0), roster(2, 0, 1, 0, 0, 0)]);
        assert_eq!(rows[0].win_pct, 0.0);
        assert_eq!(rows[1].win_pct, 0.0);
        // Equal keys: input order.
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let rows = rank_standings(&[
            roster(8, 3, 1, 0, 400, 0),
            roster(2, 3, 1, 0, 400, 0),
            roster(5, 3, 1, 0, 400, 0),
        ]);
        assert_eq!(ids(&rows), vec![8, 2, 5]);
    }

    #[test]
    fn rows_carry_record_label() {
        let rows = rank_standings(&[roster(1, 7, 5, 1, 1000, 0)]);
        assert_eq!(rows[0].record, "7-5-1");
        assert_eq!(rows[0].owner_id.as_deref(), Some("owner1"));
    }

    #[test]
    fn empty_input_empty_table() {
        assert!(rank_standings(&[]).is_empty());
    }
}
