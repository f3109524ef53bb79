pub mod game;
pub mod rules;
pub mod sanction;
pub mod set;
pub mod team;

#[cfg(test)]
mod record_contracts_test;

pub use game::{Game, GameStatus, Gender, UsageMode};
pub use rules::{
    builtin_rules, default_rules_for, CourtSwitchPolicy, GameIntervalPolicy, GameKind, KindRules,
    Rules, SubstitutionMode, SubstitutionPolicy, TeamTimeoutPolicy, TechnicalTimeoutPolicy,
    DEFAULT_INDOOR_4X4_RULES_ID, FIVB_SUBSTITUTIONS_CAP, OFFICIAL_BEACH_RULES_ID,
    OFFICIAL_INDOOR_RULES_ID,
};
pub use sanction::{Sanction, SanctionCard};
pub use set::{CourtLineup, GameSet, Substitution, Timeout, COURT_SLOTS};
pub use team::{RosterPlayer, TeamInfo, TeamSide};
