//! # subtract-square
//!
//! Turn-based, perfect-information combinatorial games behind an abstract
//! state contract, with Subtract Square as the concrete game.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: Applying a move returns a new state. Old states
//!    are never touched, so they can be shared, memoized and undone to.
//!
//! 2. **Contract First**: Drivers and analysis only use the `GameState`
//!    trait. A game is any type implementing it.
//!
//! 3. **Checked at the Edge**: `make_move` rejects illegal moves with
//!    `GameError::InvalidMove`; `apply_move` is the unchecked inner step.
//!
//! ## Modules
//!
//! - `core`: `GameState` contract, players, outcomes, errors
//! - `games`: Concrete games (Subtract Square)
//! - `analysis`: Memoized evaluation of the rough outcome heuristic
//! - `session`: Game driver with history, undo and results

pub mod core;
pub mod games;
pub mod analysis;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameError, GameState, Outcome, Player, Result, DRAW, LOSE, WIN};

pub use crate::games::subtract_square::{SubtractSquareConfig, SubtractSquareKey, SubtractSquareState};

pub use crate::analysis::{estimate_rough_outcome, EstimatorStats, OutcomeEstimator};

pub use crate::session::{GameResult, GameSession, GameStatus};
