//! Match records.
//!
//! A `Game` is the structured record of one played match as submitted by the
//! referee: teams, embedded ruleset snapshot, per-set play data and
//! sanctions. The record answers the derived queries reporting needs
//! (lineup confirmed? substitutions used? sanctions in set N?) and
//! reconstructs authoritative set/match scores from the ladders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GameError, Result};

use super::rules::{GameKind, Rules};
use super::sanction::Sanction;
use super::set::{CourtLineup, GameSet, Substitution, Timeout};
use super::team::{TeamInfo, TeamSide};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Scheduled,
    Live,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Gents,
    Ladies,
    Mixed,
}

/// What the record is used for. Scoreboard-only usages skip most of the
/// scoresheet data but share the same record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsageMode {
    Normal,
    PointsScoreboard,
    TimeoutsOnly,
}

/// The structured record of one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub gender: Gender,
    pub usage: UsageMode,
    pub status: GameStatus,
    pub home: TeamInfo,
    pub guest: TeamInfo,
    /// Snapshot of the ruleset this match was created under; `rules.id`
    /// points back at the source configuration.
    pub rules: Rules,
    pub sets: Vec<GameSet>,
    pub home_sanctions: Vec<Sanction>,
    pub guest_sanctions: Vec<Sanction>,
    pub home_sets: u8,
    pub guest_sets: u8,
}

impl Game {
    /// Creates a scheduled match after validating the ruleset.
    pub fn new(
        id: Uuid,
        scheduled_at: DateTime<Utc>,
        gender: Gender,
        usage: UsageMode,
        home: TeamInfo,
        guest: TeamInfo,
        rules: Rules,
    ) -> Result<Self> {
        rules.validate()?;
        Ok(Self {
            id,
            scheduled_at,
            gender,
            usage,
            status: GameStatus::Scheduled,
            home,
            guest,
            rules,
            sets: Vec::new(),
            home_sanctions: Vec::new(),
            guest_sanctions: Vec::new(),
            home_sets: 0,
            guest_sets: 0,
        })
    }

    pub fn kind(&self) -> GameKind {
        self.rules.kind()
    }

    pub fn team(&self, side: TeamSide) -> &TeamInfo {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Guest => &self.guest,
        }
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    pub fn set(&self, set_index: usize) -> Result<&GameSet> {
        self.sets.get(set_index).ok_or(GameError::SetIndexOutOfRange {
            index: set_index,
            count: self.sets.len(),
        })
    }

    fn check_set_index(&self, set_index: usize) -> Result<()> {
        self.set(set_index).map(|_| ())
    }

    fn current_set_mut(&mut self, action: &'static str) -> Result<&mut GameSet> {
        if self.status != GameStatus::Live {
            return Err(GameError::InvalidStatus { action, status: self.status });
        }
        // Live implies at least one set; hand-built records may break that.
        let status = self.status;
        self.sets.last_mut().ok_or(GameError::InvalidStatus { action, status })
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Opens the next set, moving a scheduled match to live. Acting captains
    /// start out as the roster captains.
    pub fn start_set(&mut self, first_serving: TeamSide) -> Result<usize> {
        if self.status == GameStatus::Completed {
            return Err(GameError::InvalidStatus { action: "start a set", status: self.status });
        }
        self.sets.push(GameSet::new(first_serving, self.home.captain, self.guest.captain));
        self.status = GameStatus::Live;
        Ok(self.sets.len() - 1)
    }

    /// Appends a rally outcome to the current set.
    pub fn record_point(&mut self, side: TeamSide) -> Result<()> {
        self.current_set_mut("record a point")?.record_rally(side);
        Ok(())
    }

    /// Records a team timeout in the current set at the current score.
    pub fn record_timeout(&mut self, side: TeamSide) -> Result<()> {
        let set = self.current_set_mut("record a timeout")?;
        let timeout = Timeout { home_points: set.home_points, guest_points: set.guest_points };
        match side {
            TeamSide::Home => {
                set.home_timeouts.push(timeout);
                set.home_timeouts_used += 1;
            }
            TeamSide::Guest => {
                set.guest_timeouts.push(timeout);
                set.guest_timeouts_used += 1;
            }
        }
        Ok(())
    }

    /// Records a substitution in the current set at the current score and
    /// swaps the player on the current lineup. The record is kept even when
    /// the outgoing player is not on court (paper scoresheets get fixed
    /// after the fact; legality is not policed here).
    pub fn record_substitution(&mut self, side: TeamSide, player_in: u8, player_out: u8) -> Result<()> {
        let set = self.current_set_mut("record a substitution")?;
        let substitution = Substitution {
            player_in,
            player_out,
            home_points: set.home_points,
            guest_points: set.guest_points,
        };
        let (events, lineup) = match side {
            TeamSide::Home => (&mut set.home_substitutions, &mut set.home_current_lineup),
            TeamSide::Guest => (&mut set.guest_substitutions, &mut set.guest_current_lineup),
        };
        events.push(substitution);
        for slot in lineup.positions.iter_mut() {
            if *slot == player_out {
                *slot = player_in;
                break;
            }
        }
        Ok(())
    }

    /// Records a sanction against one team. The sanction's set index must
    /// reference an existing set.
    pub fn record_sanction(&mut self, side: TeamSide, sanction: Sanction) -> Result<()> {
        self.check_set_index(sanction.set_index)?;
        match side {
            TeamSide::Home => self.home_sanctions.push(sanction),
            TeamSide::Guest => self.guest_sanctions.push(sanction),
        }
        Ok(())
    }

    /// Reconstructs the authoritative score from the ladders: every set's
    /// counters are recomputed, set wins are retallied and the match is
    /// completed once a side holds the majority the ruleset requires.
    pub fn refresh_score(&mut self) {
        let mut home_sets = 0u8;
        let mut guest_sets = 0u8;
        for set in &mut self.sets {
            set.refresh_points();
            match set.winner() {
                Some(TeamSide::Home) => home_sets += 1,
                Some(TeamSide::Guest) => guest_sets += 1,
                None => {}
            }
        }
        self.home_sets = home_sets;
        self.guest_sets = guest_sets;
        let needed = self.rules.sets_to_win();
        if home_sets >= needed || guest_sets >= needed {
            self.status = GameStatus::Completed;
        }
    }

    // ========================================================================
    // Derived queries
    // ========================================================================

    /// Both starting lineups fully assigned for the given set.
    pub fn is_lineup_confirmed(&self, set_index: usize) -> Result<bool> {
        let set = self.set(set_index)?;
        Ok(set.home_starting_lineup.is_confirmed() && set.guest_starting_lineup.is_confirmed())
    }

    pub fn has_substitutions(&self, set_index: usize) -> Result<bool> {
        let set = self.set(set_index)?;
        Ok(!set.home_substitutions.is_empty() || !set.guest_substitutions.is_empty())
    }

    pub fn has_timeouts(&self, set_index: usize) -> Result<bool> {
        let set = self.set(set_index)?;
        Ok(!set.home_timeouts.is_empty() || !set.guest_timeouts.is_empty())
    }

    /// Whether either team was sanctioned in the given set.
    pub fn has_sanctions(&self, set_index: usize) -> Result<bool> {
        self.check_set_index(set_index)?;
        Ok(self.home_sanctions.iter().any(|s| s.set_index == set_index)
            || self.guest_sanctions.iter().any(|s| s.set_index == set_index))
    }

    /// One team's sanctions in the given set, in the order they were given.
    pub fn sanctions_for(&self, side: TeamSide, set_index: usize) -> Result<Vec<&Sanction>> {
        self.check_set_index(set_index)?;
        let sanctions = match side {
            TeamSide::Home => &self.home_sanctions,
            TeamSide::Guest => &self.guest_sanctions,
        };
        Ok(sanctions.iter().filter(|s| s.set_index == set_index).collect())
    }

    pub fn substitutions_for(&self, side: TeamSide, set_index: usize) -> Result<&[Substitution]> {
        let set = self.set(set_index)?;
        Ok(match side {
            TeamSide::Home => &set.home_substitutions,
            TeamSide::Guest => &set.guest_substitutions,
        })
    }

    pub fn timeouts_for(&self, side: TeamSide, set_index: usize) -> Result<&[Timeout]> {
        let set = self.set(set_index)?;
        Ok(match side {
            TeamSide::Home => &set.home_timeouts,
            TeamSide::Guest => &set.guest_timeouts,
        })
    }

    pub fn starting_lineup_for(&self, side: TeamSide, set_index: usize) -> Result<&CourtLineup> {
        let set = self.set(set_index)?;
        Ok(match side {
            TeamSide::Home => &set.home_starting_lineup,
            TeamSide::Guest => &set.guest_starting_lineup,
        })
    }

    pub fn is_libero(&self, side: TeamSide, number: u8) -> bool {
        self.team(side).is_libero(number)
    }
}
