//! Team descriptions as they appear on a match record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Home or guest side of a match.
///
/// Serialized with the single-letter codes the scoresheet ladder uses, so the
/// same type doubles as a ladder token ("H" scored / "G" scored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TeamSide {
    #[default]
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "G")]
    Guest,
}

impl TeamSide {
    #[inline]
    pub fn opponent(&self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Guest,
            TeamSide::Guest => TeamSide::Home,
        }
    }

    #[inline]
    pub fn is_home(&self) -> bool {
        matches!(self, TeamSide::Home)
    }
}

/// One roster entry (shirt number + display name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub number: u8,
    pub name: String,
}

/// One team's entry on a match record.
///
/// This is a snapshot taken when the referee submits the match; the league's
/// team registry is a separate concern and may have moved on since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub id: Uuid,
    pub name: String,
    /// Shirt color, "#RRGGBB".
    pub color: String,
    /// Libero shirt color, "#RRGGBB".
    pub libero_color: String,
    pub players: Vec<RosterPlayer>,
    /// Shirt numbers of the players fielded as liberos.
    pub liberos: Vec<u8>,
    /// Shirt number of the team captain.
    pub captain: u8,
}

impl TeamInfo {
    pub fn is_libero(&self, number: u8) -> bool {
        self.liberos.contains(&number)
    }

    pub fn has_player(&self, number: u8) -> bool {
        self.players.iter().any(|p| p.number == number)
    }

    pub fn player_name(&self, number: u8) -> Option<&str> {
        self.players.iter().find(|p| p.number == number).map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> TeamInfo {
        TeamInfo {
            id: Uuid::new_v4(),
            name: "Eagles".to_string(),
            color: "#FF0000".to_string(),
            libero_color: "#FFFFFF".to_string(),
            players: vec![
                RosterPlayer { number: 1, name: "Ada".to_string() },
                RosterPlayer { number: 7, name: "Grace".to_string() },
                RosterPlayer { number: 12, name: "Mary".to_string() },
            ],
            liberos: vec![12],
            captain: 1,
        }
    }

    #[test]
    fn libero_lookup_checks_the_libero_subset() {
        let team = team();
        assert!(team.is_libero(12));
        assert!(!team.is_libero(7));
        assert!(!team.is_libero(99));
    }

    #[test]
    fn player_name_lookup() {
        let team = team();
        assert_eq!(team.player_name(7), Some("Grace"));
        assert_eq!(team.player_name(99), None);
        assert!(team.has_player(1));
        assert!(!team.has_player(2));
    }

    #[test]
    fn side_serializes_as_single_letter_code() {
        assert_eq!(serde_json::to_string(&TeamSide::Home).unwrap(), "\"H\"");
        assert_eq!(serde_json::to_string(&TeamSide::Guest).unwrap(), "\"G\"");
        assert_eq!(TeamSide::Home.opponent(), TeamSide::Guest);
    }
}
