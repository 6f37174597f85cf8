//! Starting configuration for a Subtract Square game.

use serde::{Deserialize, Serialize};

use super::state::SubtractSquareState;
use crate::core::Player;
use crate::session::GameSession;

/// Subtract Square starting configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtractSquareConfig {
    /// Total the game starts from (default: 10).
    pub starting_value: u64,

    /// Player who moves first (default: `Player::First`).
    pub first_player: Player,
}

impl Default for SubtractSquareConfig {
    fn default() -> Self {
        Self {
            starting_value: 10,
            first_player: Player::First,
        }
    }
}

impl SubtractSquareConfig {
    /// Create a new config with a custom starting value.
    pub fn with_starting_value(mut self, value: u64) -> Self {
        self.starting_value = value;
        self
    }

    /// Create a new config with a custom first player.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// The root state described by this config.
    #[must_use]
    pub fn initial_state(&self) -> SubtractSquareState {
        SubtractSquareState::new(self.first_player.is_first(), self.starting_value)
    }

    /// A session starting from [`initial_state`](Self::initial_state).
    #[must_use]
    pub fn new_session(&self) -> GameSession<SubtractSquareState> {
        GameSession::new(self.initial_state())
    }
}
