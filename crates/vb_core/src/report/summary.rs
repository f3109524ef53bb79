//! Compact score projection.
//!
//! Reduces a full match record to the handful of facts standings and the
//! export layers consume: who played, per-set points, sets won.

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::models::game::Game;
use crate::models::team::TeamSide;

/// Final score of one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub home_points: u16,
    pub guest_points: u16,
}

/// The compact scoring facts of one match. Recomputed on demand, never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub home_id: Uuid,
    pub home_name: String,
    pub home_color: String,
    pub guest_id: Uuid,
    pub guest_name: String,
    pub guest_color: String,
    pub set_scores: Vec<SetScore>,
    pub home_sets: u8,
    pub guest_sets: u8,
}

impl ScoreSummary {
    /// Pure projection of a match record.
    ///
    /// Per-set points are counted from each set's ladder, not the stored
    /// counters; a stale counter only produces a warning.
    pub fn project(game: &Game) -> Self {
        let set_scores = game
            .sets
            .iter()
            .enumerate()
            .map(|(set_index, set)| {
                let home_points = set.points(TeamSide::Home);
                let guest_points = set.points(TeamSide::Guest);
                if home_points != set.home_points || guest_points != set.guest_points {
                    warn!(
                        set_index,
                        stored_home = set.home_points,
                        stored_guest = set.guest_points,
                        counted_home = home_points,
                        counted_guest = guest_points,
                        "set counters disagree with ladder; projecting ladder counts"
                    );
                }
                SetScore { home_points, guest_points }
            })
            .collect();

        Self {
            home_id: game.home.id,
            home_name: game.home.name.clone(),
            home_color: game.home.color.clone(),
            guest_id: game.guest.id,
            guest_name: game.guest.name.clone(),
            guest_color: game.guest.color.clone(),
            set_scores,
            home_sets: game.home_sets,
            guest_sets: game.guest_sets,
        }
    }
}
