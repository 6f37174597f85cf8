//! Concrete games implementing [`GameState`](crate::core::GameState).

pub mod subtract_square;
