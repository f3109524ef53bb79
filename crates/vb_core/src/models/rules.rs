//! Ruleset configuration.
//!
//! A ruleset fixes the legal structure of a match before it is played: how
//! many sets, how many points per set, which timeout and substitution
//! policies apply. Rulesets are immutable once built; a match embeds a
//! snapshot of the ruleset it was created under.
//!
//! Three built-in rulesets (official indoor, official beach, default indoor
//! 4x4) are exposed through a read-only process-wide registry with fixed
//! identities.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RulesError;

/// Match discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    #[serde(rename = "INDOOR")]
    Indoor,
    #[serde(rename = "BEACH")]
    Beach,
    #[serde(rename = "INDOOR_4X4")]
    Indoor4x4,
}

/// Substitution bookkeeping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubstitutionMode {
    #[serde(rename = "FIVB")]
    Fivb,
    #[serde(rename = "ALT1")]
    Alternative1,
    #[serde(rename = "ALT2")]
    Alternative2,
    #[serde(rename = "NONE")]
    Unrestricted,
}

/// FIVB rules allow at most 12 substitutions per team per set.
pub const FIVB_SUBSTITUTIONS_CAP: u8 = 12;

/// Per-set substitution policy.
///
/// Fields are private so every construction path goes through [`Self::new`],
/// which applies the FIVB cap. The clamp is deliberate legacy behavior: a
/// FIVB policy asked for more than 12 substitutions stores 12, and callers
/// observe the clamped value through [`Self::per_set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SubstitutionPolicyWire")]
pub struct SubstitutionPolicy {
    mode: SubstitutionMode,
    per_set: u8,
}

#[derive(Deserialize)]
struct SubstitutionPolicyWire {
    mode: SubstitutionMode,
    per_set: u8,
}

impl From<SubstitutionPolicyWire> for SubstitutionPolicy {
    fn from(wire: SubstitutionPolicyWire) -> Self {
        Self::new(wire.mode, wire.per_set)
    }
}

impl SubstitutionPolicy {
    pub fn new(mode: SubstitutionMode, per_set: u8) -> Self {
        let per_set = match mode {
            SubstitutionMode::Fivb => per_set.min(FIVB_SUBSTITUTIONS_CAP),
            _ => per_set,
        };
        Self { mode, per_set }
    }

    pub fn mode(&self) -> SubstitutionMode {
        self.mode
    }

    pub fn per_set(&self) -> u8 {
        self.per_set
    }
}

/// Team timeout policy for one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTimeoutPolicy {
    pub enabled: bool,
    pub per_set: u8,
    pub duration_sec: u16,
}

/// Technical (scheduled) timeout policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalTimeoutPolicy {
    pub enabled: bool,
    pub duration_sec: u16,
}

/// Interval between sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameIntervalPolicy {
    pub enabled: bool,
    pub duration_sec: u16,
}

/// Beach court-switch policy (sides swap every N points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtSwitchPolicy {
    pub enabled: bool,
    pub freq_normal: u8,
    pub freq_tie_break: u8,
}

/// Kind-specific configuration.
///
/// Fields that only apply to one discipline live on its variant; everything
/// shared by all disciplines stays on [`Rules`]. `max_consecutive_serves`
/// uses 0 for "no limit".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum KindRules {
    #[serde(rename = "INDOOR")]
    Indoor { substitution: SubstitutionPolicy },
    #[serde(rename = "BEACH")]
    Beach { court_switches: CourtSwitchPolicy, max_consecutive_serves: u8 },
    #[serde(rename = "INDOOR_4X4")]
    Indoor4x4 { substitution: SubstitutionPolicy, max_consecutive_serves: u8 },
}

impl KindRules {
    pub fn kind(&self) -> GameKind {
        match self {
            KindRules::Indoor { .. } => GameKind::Indoor,
            KindRules::Beach { .. } => GameKind::Beach,
            KindRules::Indoor4x4 { .. } => GameKind::Indoor4x4,
        }
    }

    /// Substitution policy, for disciplines that have one.
    pub fn substitution(&self) -> Option<SubstitutionPolicy> {
        match self {
            KindRules::Indoor { substitution } => Some(*substitution),
            KindRules::Indoor4x4 { substitution, .. } => Some(*substitution),
            KindRules::Beach { .. } => None,
        }
    }

    pub fn court_switches(&self) -> Option<CourtSwitchPolicy> {
        match self {
            KindRules::Beach { court_switches, .. } => Some(*court_switches),
            _ => None,
        }
    }
}

/// Immutable match-structure configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub id: Uuid,
    pub name: String,
    pub sets_per_game: u8,
    pub points_per_set: u16,
    pub tie_break_in_last_set: bool,
    pub points_in_tie_break: u16,
    pub two_points_difference: bool,
    pub sanctions_enabled: bool,
    pub team_timeouts: TeamTimeoutPolicy,
    pub technical_timeouts: TechnicalTimeoutPolicy,
    pub game_intervals: GameIntervalPolicy,
    #[serde(flatten)]
    pub kind_rules: KindRules,
}

impl Rules {
    pub fn kind(&self) -> GameKind {
        self.kind_rules.kind()
    }

    /// Sets a side must take to win the match.
    pub fn sets_to_win(&self) -> u8 {
        self.sets_per_game / 2 + 1
    }

    /// Rejects inconsistent configurations.
    ///
    /// Counts are unsigned, so negative values are unrepresentable; what is
    /// left to check is zeroes where the configuration claims an enabled
    /// feature. The FIVB substitution clamp is applied at construction, not
    /// here.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.sets_per_game == 0 {
            return Err(configuration("sets_per_game must be at least 1"));
        }
        if self.points_per_set == 0 {
            return Err(configuration("points_per_set must be at least 1"));
        }
        if self.tie_break_in_last_set && self.points_in_tie_break == 0 {
            return Err(configuration("points_in_tie_break must be at least 1 when the tie break is enabled"));
        }
        if self.team_timeouts.enabled && self.team_timeouts.per_set == 0 {
            return Err(configuration("team_timeouts.per_set must be at least 1 when enabled"));
        }
        if self.team_timeouts.enabled && self.team_timeouts.duration_sec == 0 {
            return Err(configuration("team_timeouts.duration_sec must be at least 1 when enabled"));
        }
        if self.technical_timeouts.enabled && self.technical_timeouts.duration_sec == 0 {
            return Err(configuration("technical_timeouts.duration_sec must be at least 1 when enabled"));
        }
        if self.game_intervals.enabled && self.game_intervals.duration_sec == 0 {
            return Err(configuration("game_intervals.duration_sec must be at least 1 when enabled"));
        }
        if let KindRules::Beach { court_switches, .. } = &self.kind_rules {
            if court_switches.enabled && (court_switches.freq_normal == 0 || court_switches.freq_tie_break == 0) {
                return Err(configuration("court switch frequencies must be at least 1 when enabled"));
            }
        }
        Ok(())
    }
}

fn configuration(reason: &str) -> RulesError {
    RulesError::Configuration { reason: reason.to_string() }
}

// ============================================================================
// Built-in rulesets
// ============================================================================

/// Fixed identity of the official FIVB indoor 6x6 ruleset.
pub const OFFICIAL_INDOOR_RULES_ID: Uuid = Uuid::from_u128(0x8f3d_0a41_5be2_42c9_9d1a_6c70_31e5_a001);
/// Fixed identity of the official FIVB beach ruleset.
pub const OFFICIAL_BEACH_RULES_ID: Uuid = Uuid::from_u128(0x8f3d_0a41_5be2_42c9_9d1a_6c70_31e5_a002);
/// Fixed identity of the default indoor 4x4 ruleset.
pub const DEFAULT_INDOOR_4X4_RULES_ID: Uuid = Uuid::from_u128(0x8f3d_0a41_5be2_42c9_9d1a_6c70_31e5_a003);

// Read-only; no write path exists, matches only ever copy out of it.
static BUILTIN_RULES: Lazy<[Rules; 3]> =
    Lazy::new(|| [official_indoor(), official_beach(), default_indoor_4x4()]);

fn official_indoor() -> Rules {
    Rules {
        id: OFFICIAL_INDOOR_RULES_ID,
        name: "FIVB indoor 6x6".to_string(),
        sets_per_game: 5,
        points_per_set: 25,
        tie_break_in_last_set: true,
        points_in_tie_break: 15,
        two_points_difference: true,
        sanctions_enabled: true,
        team_timeouts: TeamTimeoutPolicy { enabled: true, per_set: 2, duration_sec: 30 },
        technical_timeouts: TechnicalTimeoutPolicy { enabled: true, duration_sec: 60 },
        game_intervals: GameIntervalPolicy { enabled: true, duration_sec: 180 },
        kind_rules: KindRules::Indoor {
            substitution: SubstitutionPolicy::new(SubstitutionMode::Fivb, 6),
        },
    }
}

fn official_beach() -> Rules {
    Rules {
        id: OFFICIAL_BEACH_RULES_ID,
        name: "FIVB beach".to_string(),
        sets_per_game: 3,
        points_per_set: 21,
        tie_break_in_last_set: true,
        points_in_tie_break: 15,
        two_points_difference: true,
        sanctions_enabled: true,
        team_timeouts: TeamTimeoutPolicy { enabled: true, per_set: 1, duration_sec: 30 },
        technical_timeouts: TechnicalTimeoutPolicy { enabled: false, duration_sec: 30 },
        game_intervals: GameIntervalPolicy { enabled: true, duration_sec: 60 },
        kind_rules: KindRules::Beach {
            court_switches: CourtSwitchPolicy { enabled: true, freq_normal: 7, freq_tie_break: 5 },
            max_consecutive_serves: 0,
        },
    }
}

fn default_indoor_4x4() -> Rules {
    Rules {
        id: DEFAULT_INDOOR_4X4_RULES_ID,
        name: "Default indoor 4x4".to_string(),
        sets_per_game: 5,
        points_per_set: 25,
        tie_break_in_last_set: true,
        points_in_tie_break: 15,
        two_points_difference: true,
        sanctions_enabled: false,
        team_timeouts: TeamTimeoutPolicy { enabled: true, per_set: 2, duration_sec: 30 },
        technical_timeouts: TechnicalTimeoutPolicy { enabled: false, duration_sec: 60 },
        game_intervals: GameIntervalPolicy { enabled: true, duration_sec: 120 },
        kind_rules: KindRules::Indoor4x4 {
            substitution: SubstitutionPolicy::new(SubstitutionMode::Unrestricted, 4),
            max_consecutive_serves: 0,
        },
    }
}

/// The built-in ruleset for a discipline.
pub fn default_rules_for(kind: GameKind) -> &'static Rules {
    match kind {
        GameKind::Indoor => &BUILTIN_RULES[0],
        GameKind::Beach => &BUILTIN_RULES[1],
        GameKind::Indoor4x4 => &BUILTIN_RULES[2],
    }
}

/// Looks up a built-in ruleset by its fixed identity.
pub fn builtin_rules(id: Uuid) -> Result<&'static Rules, RulesError> {
    BUILTIN_RULES.iter().find(|r| r.id == id).ok_or(RulesError::NotFound { id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fivb_substitutions_are_clamped_to_twelve() {
        let policy = SubstitutionPolicy::new(SubstitutionMode::Fivb, 20);
        assert_eq!(policy.per_set(), 12);
        assert_eq!(policy.mode(), SubstitutionMode::Fivb);

        // Non-FIVB modes keep the supplied value.
        let policy = SubstitutionPolicy::new(SubstitutionMode::Alternative1, 20);
        assert_eq!(policy.per_set(), 20);
    }

    #[test]
    fn fivb_clamp_survives_deserialization() {
        let policy: SubstitutionPolicy =
            serde_json::from_str(r#"{"mode":"FIVB","per_set":20}"#).unwrap();
        assert_eq!(policy.per_set(), 12);
    }

    #[test]
    fn zero_counts_are_rejected() {
        let mut rules = default_rules_for(GameKind::Indoor).clone();
        rules.sets_per_game = 0;
        assert!(matches!(rules.validate(), Err(RulesError::Configuration { .. })));

        let mut rules = default_rules_for(GameKind::Indoor).clone();
        rules.points_per_set = 0;
        assert!(rules.validate().is_err());

        let mut rules = default_rules_for(GameKind::Indoor).clone();
        rules.points_in_tie_break = 0;
        assert!(rules.validate().is_err());

        let mut rules = default_rules_for(GameKind::Beach).clone();
        rules.kind_rules = KindRules::Beach {
            court_switches: CourtSwitchPolicy { enabled: true, freq_normal: 0, freq_tie_break: 5 },
            max_consecutive_serves: 0,
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn builtins_validate_and_carry_fixed_identities() {
        for kind in [GameKind::Indoor, GameKind::Beach, GameKind::Indoor4x4] {
            let rules = default_rules_for(kind);
            assert_eq!(rules.kind(), kind);
            rules.validate().unwrap();
        }
        assert_eq!(default_rules_for(GameKind::Indoor).id, OFFICIAL_INDOOR_RULES_ID);
        assert_eq!(default_rules_for(GameKind::Beach).id, OFFICIAL_BEACH_RULES_ID);
        assert_eq!(default_rules_for(GameKind::Indoor4x4).id, DEFAULT_INDOOR_4X4_RULES_ID);
    }

    #[test]
    fn builtin_lookup_by_id() {
        let rules = builtin_rules(OFFICIAL_BEACH_RULES_ID).unwrap();
        assert_eq!(rules.kind(), GameKind::Beach);

        let miss = builtin_rules(Uuid::from_u128(42));
        assert!(matches!(miss, Err(RulesError::NotFound { .. })));
    }

    #[test]
    fn sets_to_win_is_the_majority() {
        assert_eq!(default_rules_for(GameKind::Indoor).sets_to_win(), 3);
        assert_eq!(default_rules_for(GameKind::Beach).sets_to_win(), 2);
    }

    #[test]
    fn kind_rules_round_trip_with_kind_tag() {
        let rules = default_rules_for(GameKind::Beach);
        let json = serde_json::to_value(rules).unwrap();
        assert_eq!(json["kind"], "BEACH");
        let back: Rules = serde_json::from_value(json).unwrap();
        assert_eq!(&back, rules);
    }
}
