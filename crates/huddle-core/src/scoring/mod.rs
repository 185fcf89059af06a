// Scoring & lineup resolution: requirements, best-ball optimizer, effective
// lineups, matchup pairing and standings.

pub mod best_ball;
pub mod lineup;
pub mod pairing;
pub mod requirements;
pub mod standings;

pub use best_ball::{optimize_lineup, BestBallLineup};
pub use lineup::{effective_matchup, effective_matchups, LineupBreakdown, LineupEntry};
pub use pairing::{group_matchups, MatchupPairing, Side};
pub use requirements::{PositionRequirements, Requirement, SlotKind};
pub use standings::{rank_standings, StandingsRow};
