//! Errors raised when a request breaks the store's preconditions.

use crate::game::stats::{Category, Outcome};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),
    #[error("Unknown stat category: {0}")]
    UnknownCategory(String),
    #[error("Unknown outcome: {0}")]
    UnknownOutcome(String),
    #[error("Outcome '{outcome}' is not valid for '{category}'")]
    InvalidOutcome { category: Category, outcome: Outcome },
}
