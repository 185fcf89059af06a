// Best-ball lineup selection.
//
// Greedy assignment: players are ranked by score (stable, so ties keep the
// roster's order), then each requirement is filled in template order from the
// top of that ranking. A player used for one requirement is gone for all
// later ones. This is not a global optimum for every roster shape; the greedy
// result is the one the platform's users expect to see reproduced.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::league::{PlayerTable, Position};

use super::requirements::PositionRequirements;

/// A rostered player with this week's score and resolved position.
#[derive(Debug, Clone, PartialEq)]
struct Candidate<'a> {
    id: &'a str,
    points: f64,
    position: Position,
}

/// The lineup the optimizer selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestBallLineup {
    /// Selected player ids in selection order (requirement, then score).
    pub starters: Vec<String>,
    /// Scores parallel to `starters`.
    pub starters_points: Vec<f64>,
    /// Sum of `starters_points`.
    pub total_points: f64,
}

impl BestBallLineup {
    pub fn len(&self) -> usize {
        self.starters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starters.is_empty()
    }
}

/// Select the highest-scoring legal lineup from a player pool.
///
/// Missing entries in `points` count as zero and players missing from
/// `players` resolve to `Position::Unknown`. Slots with no eligible player
/// left stay unfilled, so the lineup may be shorter than the template.
pub fn optimize_lineup<S: AsRef<str>>(
    pool: &[S],
    points: &HashMap<String, f64>,
    players: &PlayerTable,
    requirements: &PositionRequirements,
) -> BestBallLineup {
    let mut candidates: Vec<Candidate> = pool
        .iter()
        .map(|id| {
            let id = id.as_ref();
            Candidate {
                id,
                points: points.get(id).copied().unwrap_or(0.0),
                position: players.position_of(id),
            }
        })
        .collect();

    // `sort_by` is stable: equal scores keep their pool order.
    candidates.sort_by(|a, b| b.points.partial_cmp(&a.points).unwrap_or(Ordering::Equal));

    let mut lineup = BestBallLineup::default();
    let mut used: HashSet<&str> = HashSet::new();

    for requirement in requirements.iter() {
        let mut filled = 0;
        for candidate in &candidates {
            if filled >= requirement.count {
                break;
            }
            if used.contains(candidate.id) || !requirement.slot.accepts(candidate.position) {
                continue;
            }
            used.insert(candidate.id);
            lineup.starters.push(candidate.id.to_string());
            lineup.starters_points.push(candidate.points);
            filled += 1;
        }
    }

    lineup.total_points = lineup.starters_points.iter().sum();
    lineup
}
