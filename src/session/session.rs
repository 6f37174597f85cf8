//! Game driver: holds the current state and walks it to the end.

use im::Vector;
use log::{debug, info, warn};

use super::result::{GameResult, GameStatus};
use crate::core::{GameError, GameState, Player, Result};

/// A game in progress.
///
/// The session owns the current state and replaces it with the successor
/// returned by each accepted move. Earlier states are kept in persistent
/// vectors, so cloning a session to explore a branch is O(1).
///
/// ## Example
///
/// ```
/// use subtract_square::core::Player;
/// use subtract_square::games::subtract_square::SubtractSquareState;
/// use subtract_square::session::GameSession;
///
/// let mut session = GameSession::new(SubtractSquareState::new(true, 10));
/// session.play(&9).unwrap();
/// session.play(&1).unwrap();
///
/// assert!(session.is_over());
/// assert_eq!(session.winner(), Some(Player::Second));
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<S: GameState> {
    current: S,
    /// States before each played move, oldest first.
    previous: Vector<S>,
    /// Moves played, oldest first.
    history: Vector<S::Move>,
}

impl<S: GameState> GameSession<S> {
    /// Start a session from `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            previous: Vector::new(),
            history: Vector::new(),
        }
    }

    /// The current state.
    #[must_use]
    pub fn current(&self) -> &S {
        &self.current
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current.current_player()
    }

    /// Legal moves for the player to move.
    #[must_use]
    pub fn possible_moves(&self) -> Vec<S::Move> {
        self.current.possible_moves()
    }

    #[must_use]
    pub fn is_valid_move(&self, mv: &S::Move) -> bool {
        self.current.is_valid_move(mv)
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<S::Move> {
        &self.history
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.current.is_terminal() {
            GameStatus::Terminal(GameResult::stuck(self.current_player()))
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.current.is_terminal()
    }

    /// The final result, or `None` while moves remain.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.status().result()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result().map(|result| result.winner)
    }

    /// Play `mv` for the player to move.
    ///
    /// On error the session is unchanged.
    ///
    /// # Errors
    /// - `GameError::GameOver` if no moves remain
    /// - `GameError::InvalidMove` if `mv` is not legal
    pub fn play(&mut self, mv: &S::Move) -> Result<&S> {
        if self.is_over() {
            warn!("move {:?} rejected: game is over ({})", mv, self.current);
            return Err(GameError::GameOver);
        }

        let next = match self.current.make_move(mv) {
            Ok(next) => next,
            Err(err) => {
                warn!("move {:?} rejected: {}", mv, err);
                return Err(err);
            }
        };

        debug!("{} plays {:?}: {}", self.current_player(), mv, next);
        let before = std::mem::replace(&mut self.current, next);
        self.previous.push_back(before);
        self.history.push_back(mv.clone());

        if let Some(result) = self.result() {
            info!(
                "game over after {} moves: {} wins, {} loses",
                self.history.len(),
                result.winner,
                result.loser
            );
        }

        Ok(&self.current)
    }

    /// Take back the last move.
    ///
    /// # Errors
    /// Returns `GameError::NothingToUndo` at the initial state.
    pub fn undo(&mut self) -> Result<&S> {
        let before = self.previous.pop_back().ok_or(GameError::NothingToUndo)?;
        let mv = self.history.pop_back();
        debug!("undo {:?}: back to {}", mv, before);
        self.current = before;
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::subtract_square::SubtractSquareState;

    fn session(value: u64) -> GameSession<SubtractSquareState> {
        GameSession::new(SubtractSquareState::new(true, value))
    }

    #[test]
    fn test_new_session() {
        let session = session(10);
        assert_eq!(session.current().current_value(), 10);
        assert_eq!(session.current_player(), Player::First);
        assert_eq!(session.possible_moves(), vec![1, 4, 9]);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_play_updates_state() {
        let mut session = session(10);
        let next = *session.play(&4).unwrap();

        assert_eq!(next.current_value(), 6);
        assert_eq!(session.current_player(), Player::Second);
        assert_eq!(session.move_count(), 1);
        assert_eq!(session.history().front(), Some(&4));
    }

    #[test]
    fn test_invalid_move_leaves_session_unchanged() {
        let mut session = session(10);
        let err = session.play(&5).unwrap_err();

        assert!(matches!(err, GameError::InvalidMove(_)));
        assert_eq!(session.current().current_value(), 10);
        assert_eq!(session.current_player(), Player::First);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_play_after_game_over() {
        let mut session = session(1);
        session.play(&1).unwrap();

        assert!(session.is_over());
        assert_eq!(session.play(&1).unwrap_err(), GameError::GameOver);
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn test_undo() {
        let mut session = session(10);
        session.play(&9).unwrap();
        session.play(&1).unwrap();
        assert!(session.is_over());

        let back = *session.undo().unwrap();
        assert_eq!(back.current_value(), 1);
        assert_eq!(session.current_player(), Player::Second);
        assert!(!session.is_over());

        session.undo().unwrap();
        assert_eq!(session.current().current_value(), 10);
        assert_eq!(session.undo().unwrap_err(), GameError::NothingToUndo);
    }

    #[test]
    fn test_clone_branches_independently() {
        let mut main = session(10);
        main.play(&1).unwrap();

        let mut branch = main.clone();
        branch.play(&9).unwrap();

        assert_eq!(main.current().current_value(), 9);
        assert_eq!(branch.current().current_value(), 0);
        assert_eq!(main.move_count(), 1);
        assert_eq!(branch.move_count(), 2);
    }

    #[test]
    fn test_result() {
        let mut session = session(10);
        assert_eq!(session.result(), None);

        session.play(&9).unwrap();
        session.play(&1).unwrap();

        let result = session.result().unwrap();
        assert_eq!(result.loser, Player::First);
        assert_eq!(result.winner, Player::Second);
        assert_eq!(session.winner(), Some(Player::Second));
    }
}
