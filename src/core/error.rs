//! Error types for game construction.
//!
//! Every failure in this crate happens while a game is being set up.
//! Once a `TurnEngine` exists, turns never fail: unexpected input is
//! dropped and reported through `Progress::Ignored`.

use thiserror::Error;

use crate::board::SpaceType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("deck entry '{card}' has negative count {count}")]
    NegativeCount { card: String, count: i64 },

    #[error("board needs at least 2 spaces, got {len}")]
    BoardTooShort { len: usize },

    #[error("space 0 must be start, found {found}")]
    InvalidStart { found: SpaceType },

    #[error("last space must be terminal, found {found}")]
    InvalidTerminal { found: SpaceType },

    #[error("card '{card}' requires params.{param}")]
    MissingParam { card: String, param: &'static str },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
