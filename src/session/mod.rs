//! Driving a game from its first move to its end.
//!
//! A session holds the current state, validates moves, replaces the state
//! with each successor and reports the result once the player to move has
//! no moves left. Front ends (console loops, test harnesses, searches) sit
//! on top of [`GameSession`] and only see the [`GameState`](crate::core::GameState)
//! contract.

mod result;
#[allow(clippy::module_inception)]
mod session;

pub use result::{GameResult, GameStatus};
pub use session::GameSession;
