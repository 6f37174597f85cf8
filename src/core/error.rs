//! Error type shared by every game in the crate.

use thiserror::Error;

/// Errors raised by game states and sessions.
///
/// All of these are caller-input errors. Nothing here is transient or
/// worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Game is already over")]
    GameOver,

    #[error("No moves to undo")]
    NothingToUndo,

    #[error("Invalid outcome value: {0} (expected -1, 0 or 1)")]
    InvalidOutcome(i8),
}

/// Convenience Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
