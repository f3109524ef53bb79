pub mod standings;
pub mod summary;

pub use standings::{RankCriterion, Standings, StandingsKey, StandingsRow};
pub use summary::{ScoreSummary, SetScore};
