//! # vb_core - Volleyball Match Record & Standings Engine
//!
//! This library reconstructs authoritative set and match scores from
//! referee-submitted play-by-play data and folds completed matches into
//! division standings.
//!
//! ## Features
//! - Ladder-authoritative scoring (stored counters are a cache of the ladder)
//! - Ruleset validation with three built-in official configurations
//! - Mergeable standings fold for partitioned divisions
//! - JSON API for easy integration with transport layers

pub mod api;
pub mod error;
pub mod models;
pub mod report;

// Re-export the JSON API surface
pub use api::{score_summary_json, standings_json, StandingsRequest, StandingsResponse};

pub use error::{GameError, Result, RulesError};

// Re-export the match record model
pub use models::{
    builtin_rules, default_rules_for, CourtLineup, Game, GameKind, GameSet, GameStatus, Gender,
    KindRules, RosterPlayer, Rules, Sanction, SanctionCard, Substitution, SubstitutionMode,
    SubstitutionPolicy, TeamInfo, TeamSide, Timeout, UsageMode,
};

// Re-export the reporting engine
pub use report::{RankCriterion, ScoreSummary, SetScore, Standings, StandingsKey, StandingsRow};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
