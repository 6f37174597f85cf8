//! Player identification for two-player alternating games.
//!
//! Game states only track a single turn flag (`is_first_player_turn`).
//! `Player` gives that flag a name, an opponent, and a display form.

use serde::{Deserialize, Serialize};

/// One of the two players of an alternating game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The player who moves when the turn flag is set.
    #[default]
    First,
    /// The player who moves when the turn flag is clear.
    Second,
}

impl Player {
    /// Player for a given turn flag.
    ///
    /// ```
    /// use subtract_square::core::Player;
    ///
    /// assert_eq!(Player::from_turn(true), Player::First);
    /// assert_eq!(Player::from_turn(false), Player::Second);
    /// ```
    #[must_use]
    pub const fn from_turn(is_first_player_turn: bool) -> Self {
        if is_first_player_turn {
            Player::First
        } else {
            Player::Second
        }
    }

    /// Whether this is the first player.
    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Player::First)
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Short name: `"p1"` or `"p2"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::First => "p1",
            Player::Second => "p2",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
