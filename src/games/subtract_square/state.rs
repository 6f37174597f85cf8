//! Subtract Square game state.

use serde::{Deserialize, Serialize};

use crate::analysis::estimate_rough_outcome;
use crate::core::{GameState, Outcome};

/// A position in Subtract Square.
///
/// Players alternately subtract a positive perfect square, no larger than
/// the current value, from the shared total. The player left facing `0`
/// cannot move and loses.
///
/// ```
/// use subtract_square::core::{GameState, Player};
/// use subtract_square::games::subtract_square::SubtractSquareState;
///
/// let state = SubtractSquareState::new(true, 10);
/// assert_eq!(state.possible_moves(), vec![1, 4, 9]);
///
/// let next = state.make_move(&9).unwrap();
/// assert_eq!(next.current_value(), 1);
/// assert_eq!(next.current_player(), Player::Second);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractSquareState {
    is_first_player_turn: bool,
    current_value: u64,
}

/// Canonical form of a [`SubtractSquareState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubtractSquareKey {
    pub is_first_player_turn: bool,
    pub current_value: u64,
}

impl std::fmt::Display for SubtractSquareKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SubtractSquareGameState(p1_turn={}, current_value={})",
            self.is_first_player_turn, self.current_value
        )
    }
}

impl SubtractSquareState {
    /// Create a state with the given player to move and remaining total.
    #[must_use]
    pub const fn new(is_first_player_turn: bool, current_value: u64) -> Self {
        Self {
            is_first_player_turn,
            current_value,
        }
    }

    /// The remaining total.
    #[must_use]
    pub const fn current_value(&self) -> u64 {
        self.current_value
    }
}

/// Largest `r` with `r * r <= n`.
fn integer_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    // Float estimate can be off by one near the top of the range.
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

impl std::fmt::Display for SubtractSquareState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Current value: {}, Player turn: {}",
            self.current_value,
            self.current_player()
        )
    }
}

impl GameState for SubtractSquareState {
    type Move = u64;
    type Canonical = SubtractSquareKey;

    fn is_first_player_turn(&self) -> bool {
        self.is_first_player_turn
    }

    /// Squares `1, 4, 9, ...` up to the current value, ascending.
    fn possible_moves(&self) -> Vec<u64> {
        (1..=integer_sqrt(self.current_value))
            .map(|k| k * k)
            .collect()
    }

    /// `(index + 1)^2` while it fits under the current value.
    fn nth_move(&self, index: usize) -> Option<u64> {
        let root = u64::try_from(index).ok()?.checked_add(1)?;
        root.checked_mul(root)
            .filter(|&square| square <= self.current_value)
    }

    /// O(1) check equivalent to membership in `possible_moves`.
    fn is_valid_move(&self, mv: &u64) -> bool {
        let mv = *mv;
        mv >= 1 && mv <= self.current_value && {
            let root = integer_sqrt(mv);
            root * root == mv
        }
    }

    fn apply_move(&self, mv: &u64) -> Self {
        debug_assert!(self.is_valid_move(mv), "illegal move {} from {}", mv, self);
        Self {
            is_first_player_turn: !self.is_first_player_turn,
            current_value: self.current_value.saturating_sub(*mv),
        }
    }

    fn canonical_form(&self) -> SubtractSquareKey {
        SubtractSquareKey {
            is_first_player_turn: self.is_first_player_turn,
            current_value: self.current_value,
        }
    }

    /// `Win` when some square leads to a successor estimated as `Lose`,
    /// `Lose` at zero, `Draw` otherwise.
    fn rough_outcome(&self) -> Outcome {
        estimate_rough_outcome(self)
    }

    fn is_terminal(&self) -> bool {
        self.current_value == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameError, Player, LOSE};

    #[test]
    fn test_integer_sqrt() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(15), 3);
        assert_eq!(integer_sqrt(16), 4);
        assert_eq!(integer_sqrt(17), 4);
        assert_eq!(integer_sqrt(u64::MAX), 4_294_967_295);
    }

    #[test]
    fn test_possible_moves() {
        assert_eq!(SubtractSquareState::new(true, 10).possible_moves(), vec![1, 4, 9]);
        assert_eq!(SubtractSquareState::new(true, 16).possible_moves(), vec![1, 4, 9, 16]);
        assert_eq!(SubtractSquareState::new(false, 3).possible_moves(), vec![1]);
        assert!(SubtractSquareState::new(true, 0).possible_moves().is_empty());
    }

    #[test]
    fn test_is_valid_move() {
        let state = SubtractSquareState::new(true, 10);
        assert!(state.is_valid_move(&1));
        assert!(state.is_valid_move(&4));
        assert!(state.is_valid_move(&9));
        assert!(!state.is_valid_move(&0));
        assert!(!state.is_valid_move(&2));
        assert!(!state.is_valid_move(&16));
    }

    #[test]
    fn test_nth_move() {
        let state = SubtractSquareState::new(true, 10);
        assert_eq!(state.nth_move(0), Some(1));
        assert_eq!(state.nth_move(2), Some(9));
        assert_eq!(state.nth_move(3), None);
        assert_eq!(SubtractSquareState::new(true, 0).nth_move(0), None);
        assert_eq!(SubtractSquareState::new(true, u64::MAX).nth_move(usize::MAX), None);

        for value in 0..300 {
            let state = SubtractSquareState::new(false, value);
            let lazy: Vec<u64> = (0..).map_while(|i| state.nth_move(i)).collect();
            assert_eq!(lazy, state.possible_moves(), "value {}", value);
        }
    }

    #[test]
    fn test_make_move() {
        let state = SubtractSquareState::new(true, 10);
        let next = state.make_move(&4).unwrap();

        assert_eq!(next.current_value(), 6);
        assert!(!next.is_first_player_turn());
        // Original untouched
        assert_eq!(state.current_value(), 10);
        assert!(state.is_first_player_turn());
    }

    #[test]
    fn test_make_move_invalid() {
        let state = SubtractSquareState::new(true, 10);
        assert!(matches!(state.make_move(&3), Err(GameError::InvalidMove(_))));
        assert!(matches!(state.make_move(&16), Err(GameError::InvalidMove(_))));
        assert!(matches!(
            SubtractSquareState::new(false, 0).make_move(&1),
            Err(GameError::InvalidMove(_))
        ));
    }

    #[test]
    fn test_display() {
        let state = SubtractSquareState::new(false, 7);
        assert_eq!(state.to_string(), "Current value: 7, Player turn: p2");
        assert_eq!(
            state.canonical_form().to_string(),
            "SubtractSquareGameState(p1_turn=false, current_value=7)"
        );
    }

    #[test]
    fn test_canonical_form_equality() {
        let a = SubtractSquareState::new(true, 12);
        let b = SubtractSquareState::new(true, 12);
        let c = SubtractSquareState::new(false, 12);
        let d = SubtractSquareState::new(true, 11);

        assert_eq!(a.canonical_form(), b.canonical_form());
        assert_ne!(a.canonical_form(), c.canonical_form());
        assert_ne!(a.canonical_form(), d.canonical_form());
    }

    #[test]
    fn test_rough_outcome_known_values() {
        assert_eq!(SubtractSquareState::new(true, 0).rough_outcome().value(), LOSE);
        assert_eq!(SubtractSquareState::new(true, 1).rough_outcome(), Outcome::Win);
        assert_eq!(SubtractSquareState::new(true, 2).rough_outcome(), Outcome::Draw);
        assert_eq!(SubtractSquareState::new(true, 3).rough_outcome(), Outcome::Draw);
        assert_eq!(SubtractSquareState::new(true, 4).rough_outcome(), Outcome::Win);
    }

    #[test]
    fn test_terminal() {
        let state = SubtractSquareState::new(true, 0);
        assert!(state.is_terminal());
        assert_eq!(state.current_player(), Player::First);
        assert!(!SubtractSquareState::new(true, 1).is_terminal());
    }

    #[test]
    fn test_serialization() {
        let state = SubtractSquareState::new(false, 42);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: SubtractSquareState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
