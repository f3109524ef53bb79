//! League standings.
//!
//! Folds score summaries into per-team accumulation rows and produces the
//! ordered division table. An aggregator is a builder local to one
//! computation; divisions computed in parallel can fold partitions
//! separately and [`Standings::merge`] the partial tables.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::summary::ScoreSummary;
use crate::models::team::TeamSide;

/// How rows are keyed.
///
/// Name keying is the historical behavior: two teams sharing a display name
/// collapse into one row. Id keying avoids the collision at the cost of
/// diverging from the paper table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StandingsKey {
    #[default]
    TeamName,
    TeamId,
}

/// One criterion of the ordering chain, applied descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankCriterion {
    MatchesWon,
    SetsDiff,
    PointsDiff,
}

/// One team's accumulated statistics within a division table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_name: String,
    pub team_color: String,
    pub matches_for: u32,
    pub matches_against: u32,
    pub matches_diff: i32,
    pub sets_for: u32,
    pub sets_against: u32,
    pub sets_diff: i32,
    pub points_for: u32,
    pub points_against: u32,
    pub points_diff: i32,
}

impl StandingsRow {
    fn new(team_name: String, team_color: String) -> Self {
        Self {
            team_name,
            team_color,
            matches_for: 0,
            matches_against: 0,
            matches_diff: 0,
            sets_for: 0,
            sets_against: 0,
            sets_diff: 0,
            points_for: 0,
            points_against: 0,
            points_diff: 0,
        }
    }

    /// Field-wise addition; the receiver keeps its display data.
    fn absorb(&mut self, other: &StandingsRow) {
        self.matches_for += other.matches_for;
        self.matches_against += other.matches_against;
        self.matches_diff += other.matches_diff;
        self.sets_for += other.sets_for;
        self.sets_against += other.sets_against;
        self.sets_diff += other.sets_diff;
        self.points_for += other.points_for;
        self.points_against += other.points_against;
        self.points_diff += other.points_diff;
    }

    fn value_for(&self, criterion: RankCriterion) -> i64 {
        match criterion {
            RankCriterion::MatchesWon => self.matches_for as i64,
            RankCriterion::SetsDiff => self.sets_diff as i64,
            RankCriterion::PointsDiff => self.points_diff as i64,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    row: StandingsRow,
}

/// Standings accumulator for one division.
///
/// Not idempotent: feeding the same match twice double-counts it. Not safe
/// for concurrent `add_match` without external synchronization; partition
/// the matches and [`Self::merge`] instead.
#[derive(Debug, Clone)]
pub struct Standings {
    key: StandingsKey,
    order: Vec<RankCriterion>,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Default for Standings {
    fn default() -> Self {
        Self::new()
    }
}

impl Standings {
    /// Name-keyed aggregator ordered by matches won only (the historical
    /// table order; ties keep insertion order).
    pub fn new() -> Self {
        Self {
            key: StandingsKey::default(),
            order: vec![RankCriterion::MatchesWon],
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_key(mut self, key: StandingsKey) -> Self {
        self.key = key;
        self
    }

    /// Replaces the ordering chain, most significant criterion first.
    pub fn with_order(mut self, order: Vec<RankCriterion>) -> Self {
        self.order = order;
        self
    }

    /// Folds one match into the table, once per side.
    pub fn add_match(&mut self, summary: &ScoreSummary) {
        self.add_side(summary, TeamSide::Home);
        self.add_side(summary, TeamSide::Guest);
    }

    fn add_side(&mut self, summary: &ScoreSummary, side: TeamSide) {
        let (key, name, color) = match (side, self.key) {
            (TeamSide::Home, StandingsKey::TeamName) => {
                (summary.home_name.clone(), &summary.home_name, &summary.home_color)
            }
            (TeamSide::Home, StandingsKey::TeamId) => {
                (summary.home_id.to_string(), &summary.home_name, &summary.home_color)
            }
            (TeamSide::Guest, StandingsKey::TeamName) => {
                (summary.guest_name.clone(), &summary.guest_name, &summary.guest_color)
            }
            (TeamSide::Guest, StandingsKey::TeamId) => {
                (summary.guest_id.to_string(), &summary.guest_name, &summary.guest_color)
            }
        };
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                // Display data is seeded on first sight and never updated.
                let idx = self.entries.len();
                self.entries.push(Entry {
                    key: key.clone(),
                    row: StandingsRow::new(name.clone(), color.clone()),
                });
                self.index.insert(key, idx);
                idx
            }
        };
        let row = &mut self.entries[idx].row;

        let (own_sets, opponent_sets) = match side {
            TeamSide::Home => (summary.home_sets, summary.guest_sets),
            TeamSide::Guest => (summary.guest_sets, summary.home_sets),
        };
        row.sets_for += own_sets as u32;
        row.sets_against += opponent_sets as u32;
        row.sets_diff += own_sets as i32 - opponent_sets as i32;

        for set in &summary.set_scores {
            let (own_points, opponent_points) = match side {
                TeamSide::Home => (set.home_points, set.guest_points),
                TeamSide::Guest => (set.guest_points, set.home_points),
            };
            row.points_for += own_points as u32;
            row.points_against += opponent_points as u32;
            row.points_diff += own_points as i32 - opponent_points as i32;
        }

        // Only a strict set majority is a win; a tied match counts against
        // both sides.
        if own_sets > opponent_sets {
            row.matches_for += 1;
            row.matches_diff += 1;
        } else {
            row.matches_against += 1;
            row.matches_diff -= 1;
        }
    }

    /// Folds another table into this one, field-wise by key. Rows already
    /// present keep their position and display data; unseen keys are
    /// appended in the other table's order.
    pub fn merge(&mut self, other: Standings) {
        for entry in other.entries {
            match self.index.get(&entry.key) {
                Some(&idx) => self.entries[idx].row.absorb(&entry.row),
                None => {
                    self.index.insert(entry.key.clone(), self.entries.len());
                    self.entries.push(entry);
                }
            }
        }
    }

    /// Rows in insertion order, unsorted.
    pub fn rows(&self) -> impl Iterator<Item = &StandingsRow> {
        self.entries.iter().map(|entry| &entry.row)
    }

    pub fn row_count(&self) -> usize {
        self.entries.len()
    }

    /// The ordered table. The sort is stable, so rows equal under the whole
    /// chain stay in insertion order and the output is reproducible.
    pub fn list(&self) -> Vec<StandingsRow> {
        let mut rows: Vec<StandingsRow> = self.rows().cloned().collect();
        rows.sort_by(|a, b| {
            for &criterion in &self.order {
                let ord = b.value_for(criterion).cmp(&a.value_for(criterion));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });
        rows
    }
}
