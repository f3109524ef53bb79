use thiserror::Error;
use uuid::Uuid;

use crate::models::game::GameStatus;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("invalid ruleset configuration: {reason}")]
    Configuration { reason: String },

    #[error("no built-in ruleset with id {id}")]
    NotFound { id: Uuid },
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("set index {index} out of range: match has {count} sets")]
    SetIndexOutOfRange { index: usize, count: usize },

    #[error("cannot {action} while match is {status:?}")]
    InvalidStatus { action: &'static str, status: GameStatus },

    #[error("unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u8, expected: u8 },

    #[error("ruleset rejected: {0}")]
    Rules(#[from] RulesError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
