//! Game status and final results.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Result of a completed game.
///
/// The player to move in a terminal state is the loser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Player,
    pub loser: Player,
}

impl GameResult {
    /// Result for a game that ended with `to_move` unable to move.
    #[must_use]
    pub const fn stuck(to_move: Player) -> Self {
        Self {
            winner: to_move.opponent(),
            loser: to_move,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }
}

/// Where a game currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain for the player to move.
    InProgress,
    /// No moves remain.
    Terminal(GameResult),
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Terminal(_))
    }

    /// The final result, if the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameStatus::Terminal(result) => Some(*result),
            GameStatus::InProgress => None,
        }
    }
}
