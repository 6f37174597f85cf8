//! Outcome analysis for any [`GameState`](crate::core::GameState).
//!
//! ## Overview
//!
//! Games answer `rough_outcome` with a shallow heuristic: a position is
//! lost only when no move exists, won if some move reaches a lost
//! position, and drawn otherwise. This module evaluates
//! that heuristic without recursion and with a memo keyed on canonical
//! form, so long move sequences and shared subtrees stay cheap.
//!
//! It is deliberately not a full game solver.
//!
//! ## Usage
//!
//! ```rust
//! use subtract_square::analysis::{estimate_rough_outcome, OutcomeEstimator};
//! use subtract_square::core::Outcome;
//! use subtract_square::games::subtract_square::SubtractSquareState;
//!
//! // One-off estimate
//! assert_eq!(estimate_rough_outcome(&SubtractSquareState::new(true, 9)), Outcome::Win);
//!
//! // Reuse the memo across many positions
//! let mut estimator = OutcomeEstimator::new();
//! for value in 0..50 {
//!     estimator.estimate(&SubtractSquareState::new(true, value));
//! }
//! assert!(estimator.stats().cache_hits > 0);
//! ```

pub mod estimator;
pub mod stats;

pub use estimator::{estimate_rough_outcome, OutcomeEstimator};
pub use stats::EstimatorStats;
