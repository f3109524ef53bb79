//! JSON API for the reporting engine.
//!
//! String-in/string-out entry points for transport layers. Envelopes carry a
//! `schema_version` so callers fail fast on incompatible payload shapes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GameError, Result};
use crate::models::game::Game;
use crate::report::standings::{RankCriterion, Standings, StandingsKey, StandingsRow};
use crate::report::summary::ScoreSummary;
use crate::SCHEMA_VERSION;

/// Standings computation request.
#[derive(Debug, Deserialize)]
pub struct StandingsRequest {
    pub schema_version: u8,
    /// Completed matches of the division, each supplied exactly once.
    pub matches: Vec<Game>,
    #[serde(default)]
    pub key: StandingsKey,
    /// Ordering criteria, most significant first. Empty keeps the default
    /// matches-won-only order.
    #[serde(default)]
    pub order: Vec<RankCriterion>,
}

/// Ordered division table.
#[derive(Debug, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub schema_version: u8,
    pub rows: Vec<StandingsRow>,
}

fn check_schema_version(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(GameError::UnsupportedSchemaVersion { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

/// Projects a match record JSON to its compact score summary JSON.
pub fn score_summary_json(game_json: &str) -> Result<String> {
    let game: Game = serde_json::from_str(game_json)?;
    let summary = ScoreSummary::project(&game);
    Ok(serde_json::to_string(&summary)?)
}

/// Folds a division's matches into the ordered standings table.
pub fn standings_json(request_json: &str) -> Result<String> {
    let request: StandingsRequest = serde_json::from_str(request_json)?;
    check_schema_version(request.schema_version)?;

    let mut standings = Standings::new().with_key(request.key);
    if !request.order.is_empty() {
        standings = standings.with_order(request.order);
    }

    debug!(matches = request.matches.len(), "folding division standings");
    for game in &request.matches {
        standings.add_match(&ScoreSummary::project(game));
    }

    let response = StandingsResponse { schema_version: SCHEMA_VERSION, rows: standings.list() };
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_version_mismatch_is_rejected() {
        let request = serde_json::json!({ "schema_version": 99, "matches": [] });
        let result = standings_json(&request.to_string());
        assert!(matches!(result, Err(GameError::UnsupportedSchemaVersion { found: 99, .. })));
    }

    #[test]
    fn malformed_payload_is_a_json_error() {
        assert!(matches!(standings_json("not json"), Err(GameError::Json(_))));
        assert!(matches!(score_summary_json("{}"), Err(GameError::Json(_))));
    }
}
