//! Sanction records.

use serde::{Deserialize, Serialize};

/// Card shown on the scoresheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SanctionCard {
    DelayWarning,
    DelayPenalty,
    Yellow,
    Red,
    RedExpulsion,
    RedDisqualification,
}

/// One sanction, tagged with the set it was given in and the score at the
/// time. `player` is the sanctioned shirt number; team-level delay cards
/// carry the acting captain's number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sanction {
    pub card: SanctionCard,
    pub player: u8,
    pub set_index: usize,
    pub home_points: u16,
    pub guest_points: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_wire_names_are_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&SanctionCard::RedExpulsion).unwrap(), "\"RED_EXPULSION\"");
        let card: SanctionCard = serde_json::from_str("\"DELAY_WARNING\"").unwrap();
        assert_eq!(card, SanctionCard::DelayWarning);
    }
}
