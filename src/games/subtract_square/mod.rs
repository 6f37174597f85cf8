//! Subtract Square.
//!
//! Two players share a running total. On your turn, subtract any positive
//! perfect square no larger than the total. The player who cannot move
//! (total is 0) loses.

mod config;
mod state;

pub use config::SubtractSquareConfig;
pub use state::{SubtractSquareKey, SubtractSquareState};
