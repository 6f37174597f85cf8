//! Game outcome scale.
//!
//! Outcomes are always from the perspective of the player to move.
//! The numeric values are fixed (`WIN = 1`, `DRAW = 0`, `LOSE = -1`) so
//! callers may compare them arithmetically or negate them to switch
//! perspective between players.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Numeric value of a win.
pub const WIN: i8 = 1;

/// Numeric value of a draw.
pub const DRAW: i8 = 0;

/// Numeric value of a loss.
pub const LOSE: i8 = -1;

/// Best result a player can guarantee, on the scale `[LOSE, WIN]`.
///
/// Ordering follows the numeric values: `Lose < Draw < Win`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Lose = -1,
    Draw = 0,
    Win = 1,
}

impl Outcome {
    /// The numeric value of this outcome.
    ///
    /// ```
    /// use subtract_square::core::{Outcome, WIN, LOSE};
    ///
    /// assert_eq!(Outcome::Win.value(), WIN);
    /// assert_eq!(Outcome::Lose.value(), LOSE);
    /// ```
    #[must_use]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Same outcome seen by the opponent.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
            Outcome::Win => Outcome::Lose,
        }
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }

    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Outcome::Lose)
    }
}

impl std::ops::Neg for Outcome {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl TryFrom<i8> for Outcome {
    type Error = GameError;

    fn try_from(value: i8) -> Result<Self> {
        match value {
            LOSE => Ok(Outcome::Lose),
            DRAW => Ok(Outcome::Draw),
            WIN => Ok(Outcome::Win),
            other => Err(GameError::InvalidOutcome(other)),
        }
    }
}

impl From<Outcome> for i8 {
    fn from(outcome: Outcome) -> i8 {
        outcome.value()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
            Outcome::Win => "win",
        };
        f.write_str(label)
    }
}
