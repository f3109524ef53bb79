//! Set-level play data.
//!
//! The ladder is the canonical record of a set: one token per rally, in
//! chronological order. The stored point counters are a cache of the ladder
//! and are overwritten from it whenever scores are refreshed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::team::TeamSide;

/// Court positions per team (indoor). Beach lineups stay empty.
pub const COURT_SLOTS: usize = 6;

/// Starting or current court assignment for one team.
///
/// `positions[i]` is the shirt number at court position `i + 1`; 0 means the
/// slot has not been assigned yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CourtLineup {
    pub positions: [u8; COURT_SLOTS],
}

impl CourtLineup {
    pub fn new(positions: [u8; COURT_SLOTS]) -> Self {
        Self { positions }
    }

    /// A lineup is confirmed once every slot holds a real shirt number.
    pub fn is_confirmed(&self) -> bool {
        self.positions.iter().all(|&number| number > 0)
    }

    pub fn has_player(&self, number: u8) -> bool {
        number > 0 && self.positions.contains(&number)
    }
}

/// A substitution event, with the score when it was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub player_in: u8,
    pub player_out: u8,
    pub home_points: u16,
    pub guest_points: u16,
}

/// A team timeout event, with the score when it was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeout {
    pub home_points: u16,
    pub guest_points: u16,
}

/// One set of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSet {
    pub duration_sec: u32,
    pub home_points: u16,
    pub guest_points: u16,
    pub home_timeouts_used: u8,
    pub guest_timeouts_used: u8,
    /// Chronological rally outcomes; the authoritative score record.
    pub ladder: Vec<TeamSide>,
    pub serving: TeamSide,
    pub first_serving: TeamSide,
    pub home_starting_lineup: CourtLineup,
    pub guest_starting_lineup: CourtLineup,
    pub home_current_lineup: CourtLineup,
    pub guest_current_lineup: CourtLineup,
    pub home_substitutions: Vec<Substitution>,
    pub guest_substitutions: Vec<Substitution>,
    pub home_timeouts: Vec<Timeout>,
    pub guest_timeouts: Vec<Timeout>,
    /// Acting captains for this set (the roster captain may be benched).
    pub home_captain: u8,
    pub guest_captain: u8,
}

impl GameSet {
    pub fn new(first_serving: TeamSide, home_captain: u8, guest_captain: u8) -> Self {
        Self {
            duration_sec: 0,
            home_points: 0,
            guest_points: 0,
            home_timeouts_used: 0,
            guest_timeouts_used: 0,
            ladder: Vec::new(),
            serving: first_serving,
            first_serving,
            home_starting_lineup: CourtLineup::default(),
            guest_starting_lineup: CourtLineup::default(),
            home_current_lineup: CourtLineup::default(),
            guest_current_lineup: CourtLineup::default(),
            home_substitutions: Vec::new(),
            guest_substitutions: Vec::new(),
            home_timeouts: Vec::new(),
            guest_timeouts: Vec::new(),
            home_captain,
            guest_captain,
        }
    }

    /// Points for one side, counted from the ladder.
    pub fn points(&self, side: TeamSide) -> u16 {
        self.ladder.iter().filter(|&&token| token == side).count() as u16
    }

    pub fn rally_count(&self) -> usize {
        self.ladder.len()
    }

    /// Side with the higher ladder count, or `None` while undecided (a tie is
    /// never a legal final state, but must not crash reporting).
    pub fn winner(&self) -> Option<TeamSide> {
        let home = self.points(TeamSide::Home);
        let guest = self.points(TeamSide::Guest);
        match home.cmp(&guest) {
            std::cmp::Ordering::Greater => Some(TeamSide::Home),
            std::cmp::Ordering::Less => Some(TeamSide::Guest),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Appends a rally outcome and keeps the cached counters in step.
    /// Rally winner serves next.
    pub fn record_rally(&mut self, side: TeamSide) {
        self.ladder.push(side);
        match side {
            TeamSide::Home => self.home_points += 1,
            TeamSide::Guest => self.guest_points += 1,
        }
        self.serving = side;
    }

    /// Overwrites the cached counters with the ladder counts, flagging any
    /// disagreement for observability.
    pub fn refresh_points(&mut self) {
        let counted_home = self.points(TeamSide::Home);
        let counted_guest = self.points(TeamSide::Guest);
        if counted_home != self.home_points || counted_guest != self.guest_points {
            warn!(
                stored_home = self.home_points,
                stored_guest = self.guest_points,
                counted_home,
                counted_guest,
                "stored set counters disagree with ladder; trusting ladder"
            );
        }
        self.home_points = counted_home;
        self.guest_points = counted_guest;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn ladder(tokens: &str) -> Vec<TeamSide> {
        tokens
            .chars()
            .map(|c| if c == 'H' { TeamSide::Home } else { TeamSide::Guest })
            .collect()
    }

    #[test]
    fn points_are_counted_from_the_ladder() {
        let mut set = GameSet::new(TeamSide::Home, 1, 2);
        set.ladder = ladder("HHGHGGGG");
        assert_eq!(set.points(TeamSide::Home), 3);
        assert_eq!(set.points(TeamSide::Guest), 5);
        assert_eq!(set.rally_count(), 8);
        assert_eq!(set.winner(), Some(TeamSide::Guest));
    }

    #[test]
    fn refresh_overwrites_stale_counters() {
        let mut set = GameSet::new(TeamSide::Home, 1, 2);
        set.ladder = ladder("HHG");
        set.home_points = 10; // stale
        set.guest_points = 9;
        set.refresh_points();
        assert_eq!(set.home_points, 2);
        assert_eq!(set.guest_points, 1);
    }

    #[test]
    fn record_rally_keeps_counters_and_serving_in_step() {
        let mut set = GameSet::new(TeamSide::Guest, 5, 6);
        assert_eq!(set.serving, TeamSide::Guest);
        set.record_rally(TeamSide::Home);
        set.record_rally(TeamSide::Home);
        set.record_rally(TeamSide::Guest);
        assert_eq!(set.home_points, 2);
        assert_eq!(set.guest_points, 1);
        assert_eq!(set.serving, TeamSide::Guest);
        assert_eq!(set.ladder, ladder("HHG"));
    }

    #[test]
    fn tied_ladder_has_no_winner() {
        let mut set = GameSet::new(TeamSide::Home, 1, 2);
        set.ladder = ladder("HG");
        assert_eq!(set.winner(), None);
        assert!(GameSet::new(TeamSide::Home, 1, 2).winner().is_none());
    }

    #[test]
    fn lineup_confirmation_requires_all_slots() {
        assert!(CourtLineup::new([1, 2, 3, 4, 5, 6]).is_confirmed());
        assert!(!CourtLineup::new([1, 2, 3, 4, 5, 0]).is_confirmed());
        assert!(!CourtLineup::default().is_confirmed());
        assert!(CourtLineup::new([1, 2, 3, 4, 5, 6]).has_player(4));
        assert!(!CourtLineup::default().has_player(0));
    }

    #[test]
    fn ladder_serializes_as_letter_tokens() {
        let mut set = GameSet::new(TeamSide::Home, 1, 2);
        set.ladder = ladder("HGG");
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["ladder"], serde_json::json!(["H", "G", "G"]));
    }

    proptest! {
        #[test]
        fn token_counts_always_sum_to_ladder_length(tokens in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut set = GameSet::new(TeamSide::Home, 1, 2);
            set.ladder = tokens
                .iter()
                .map(|&home| if home { TeamSide::Home } else { TeamSide::Guest })
                .collect();
            let total = set.points(TeamSide::Home) + set.points(TeamSide::Guest);
            prop_assert_eq!(total as usize, set.rally_count());
        }
    }
}
