//! Core types: the game-state contract, players, outcomes, errors.
//!
//! This module is game-agnostic. Concrete games live under `games` and
//! only implement [`GameState`].

pub mod error;
pub mod outcome;
pub mod player;
pub mod state;

pub use error::{GameError, Result};
pub use outcome::{Outcome, DRAW, LOSE, WIN};
pub use player::Player;
pub use state::GameState;
