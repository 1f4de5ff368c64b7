use std::path::PathBuf;

use checkers_core::{Position, RulesError};
use thiserror::Error;
use uuid::Uuid;

/// Rejected turn-controller commands. None of these change the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("it is not this side's turn")]
    NotYourTurn,

    #[error("the game is over")]
    GameOver,

    #[error("no piece of the side to move on {0}")]
    NotYourPiece(Position),

    #[error("invalid move {from} -> {to}")]
    IllegalMove { from: Position, to: Position },

    /// The automated side reported no move while it still had legal moves.
    #[error("the side to move still has legal moves")]
    MovesAvailable,
}

/// Failures talking to the suggestion endpoint. Always recovered from by
/// falling back to the local policy.
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("no suggestion endpoint configured")]
    NoEndpoint,

    #[error("suggestion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("suggestion endpoint returned status {0}")]
    Status(u16),

    #[error("suggestion endpoint declined: {0}")]
    Declined(String),

    #[error("suggestion timed out after {0} ms")]
    Timeout(u128),

    #[error("suggested move {from} -> {to} is not legal")]
    IllegalSuggestion { from: Position, to: Position },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed game record {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no game with id {0}")]
    NotFound(Uuid),

    #[error("game is still in progress")]
    Unfinished,

    #[error("game {id} has an invalid move history: {source}")]
    BadHistory {
        id: Uuid,
        #[source]
        source: RulesError,
    },

    #[error("game {0}: replayed moves do not reach the recorded final board")]
    FinalBoardMismatch(Uuid),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
