//! The abstract game-state contract.
//!
//! ## GameState
//!
//! Every game in the crate implements `GameState`. A state is an immutable
//! snapshot: applying a move returns a new state and never touches the old
//! one, so prior states can be kept and shared freely (undo, branching,
//! memoization).
//!
//! Required capabilities:
//! - Whose turn it is
//! - Legal move enumeration (empty = terminal)
//! - Successor construction
//! - A canonical form for equality and memoization
//! - A rough outcome estimate for the player to move
//!
//! Validation (`is_valid_move`), checked move application (`make_move`),
//! `current_player` and `is_terminal` are provided on top of these.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use super::error::{GameError, Result};
use super::outcome::Outcome;
use super::player::Player;

/// State of a two-player, perfect-information, alternating game.
///
/// `Display` provides the human-readable snapshot. It carries no round-trip
/// guarantee; use [`GameState::canonical_form`] for comparisons.
pub trait GameState: Clone + Display {
    /// A move that can be applied to a state.
    type Move: Clone + PartialEq + Debug;

    /// Representation used for equality testing between states.
    ///
    /// Two states with equal canonical forms have the same player to move
    /// and the same position.
    type Canonical: Clone + Eq + Hash + Debug;

    /// Whether the first player is the one to move.
    fn is_first_player_turn(&self) -> bool;

    /// All legal moves from this state.
    ///
    /// Order is not part of the contract, but must be stable for a given
    /// state. Returns an empty vec for terminal states.
    fn possible_moves(&self) -> Vec<Self::Move>;

    /// Build the successor reached by `mv` without validating it.
    ///
    /// Callers must pass a move from [`GameState::possible_moves`]. The
    /// result for any other move is unspecified; use
    /// [`GameState::make_move`] for untrusted input.
    fn apply_move(&self, mv: &Self::Move) -> Self;

    /// Canonical form of this state.
    fn canonical_form(&self) -> Self::Canonical;

    /// Estimate in `[Lose, Win]` of the best outcome the player to move
    /// can guarantee.
    fn rough_outcome(&self) -> Outcome;

    // === Provided Methods ===

    /// The player to move.
    fn current_player(&self) -> Player {
        Player::from_turn(self.is_first_player_turn())
    }

    /// Whether `mv` is a legal move from this state.
    ///
    /// Default is membership in [`GameState::possible_moves`]. Overrides
    /// may be faster but must return the same answer for every move.
    fn is_valid_move(&self, mv: &Self::Move) -> bool {
        self.possible_moves().contains(mv)
    }

    /// The move at `index` in [`GameState::possible_moves`] order, or `None`
    /// past the end.
    ///
    /// Lets callers walk moves one at a time without holding the whole
    /// list. The default rebuilds the list on every call; games with many
    /// moves per state should compute the entry directly.
    fn nth_move(&self, index: usize) -> Option<Self::Move> {
        self.possible_moves().into_iter().nth(index)
    }

    /// Apply a move, rejecting illegal ones.
    ///
    /// # Errors
    /// Returns `GameError::InvalidMove` if `mv` is not a legal move here.
    fn make_move(&self, mv: &Self::Move) -> Result<Self> {
        if !self.is_valid_move(mv) {
            return Err(GameError::InvalidMove(format!(
                "{:?} is not legal in state {}",
                mv, self
            )));
        }
        Ok(self.apply_move(mv))
    }

    /// Whether no moves remain. The player to move in a terminal state
    /// has lost.
    fn is_terminal(&self) -> bool {
        self.possible_moves().is_empty()
    }
}
