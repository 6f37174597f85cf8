//! Memoized, non-recursive evaluation of the shallow outcome heuristic.
//!
//! The heuristic, from the perspective of the player to move:
//! - no legal moves: `Lose`
//! - some successor (in `possible_moves` order) evaluates to `Lose`: `Win`
//! - otherwise: `Draw`
//!
//! There is no sign flip between plies, so `Lose` is only ever produced by
//! terminal states. Written as plain recursion this visits every state of
//! the subtree, recomputes shared subtrees and needs stack proportional to
//! the longest move sequence. The estimator walks the tree with an
//! explicit stack and memoizes results on canonical form instead, giving
//! the same answer for every state.
//!
//! States must not repeat along a move sequence (every game in the crate
//! strictly shrinks its position), otherwise the walk never ends.

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::stats::EstimatorStats;
use crate::core::{GameState, Outcome};

/// One pending state on the explicit stack.
///
/// Holds a cursor rather than the move list: the all-ones line puts one
/// frame per unit of the starting value on the stack at once.
struct Frame<S: GameState> {
    state: S,
    key: S::Canonical,
    /// Index of the next move to examine, in `possible_moves` order.
    next: usize,
}

impl<S: GameState> Frame<S> {
    fn new(state: S, key: S::Canonical) -> Self {
        Self { state, key, next: 0 }
    }
}

/// What to do with the frame on top of the stack.
enum Step<S: GameState> {
    Resolved(Outcome),
    Descend(S, S::Canonical),
}

/// Outcome estimator with a memo shared across calls.
///
/// The estimator applies the heuristic above itself. It never calls
/// [`GameState::rough_outcome`] on the states it visits, so a game whose
/// `rough_outcome` uses different logic gets different answers here.
///
/// Moves are fetched one at a time with [`GameState::nth_move`]; games
/// with many moves per state should override it.
///
/// ```
/// use subtract_square::analysis::OutcomeEstimator;
/// use subtract_square::core::Outcome;
/// use subtract_square::games::subtract_square::SubtractSquareState;
///
/// let mut estimator = OutcomeEstimator::new();
/// assert_eq!(estimator.estimate(&SubtractSquareState::new(true, 4)), Outcome::Win);
/// assert_eq!(estimator.estimate(&SubtractSquareState::new(true, 2)), Outcome::Draw);
/// ```
pub struct OutcomeEstimator<S: GameState> {
    memo: FxHashMap<S::Canonical, Outcome>,
    stats: EstimatorStats,
}

impl<S: GameState> Default for OutcomeEstimator<S> {
    fn default() -> Self {
        Self {
            memo: FxHashMap::default(),
            stats: EstimatorStats::default(),
        }
    }
}

impl<S: GameState> OutcomeEstimator<S> {
    /// Create an estimator with an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics accumulated since creation or the last `clear`.
    #[must_use]
    pub fn stats(&self) -> &EstimatorStats {
        &self.stats
    }

    /// Number of memoized positions.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.memo.len()
    }

    /// Drop the memo and reset statistics.
    pub fn clear(&mut self) {
        self.memo.clear();
        self.stats.reset();
    }

    /// Estimate the outcome for the player to move in `state`.
    pub fn estimate(&mut self, state: &S) -> Outcome {
        let root_key = state.canonical_form();
        if let Some(&outcome) = self.memo.get(&root_key) {
            self.stats.cache_hits += 1;
            return outcome;
        }

        let evaluated_before = self.stats.positions_evaluated;
        let mut stack = vec![Frame::new(state.clone(), root_key)];
        self.stats.max_stack_depth = self.stats.max_stack_depth.max(1);
        let mut result = Outcome::Lose;

        loop {
            let step = match stack.last_mut() {
                Some(frame) => self.step(frame),
                None => break,
            };

            match step {
                Step::Resolved(outcome) => {
                    if let Some(frame) = stack.pop() {
                        trace!("{} => {}", frame.state, outcome);
                        self.memo.insert(frame.key, outcome);
                        self.stats.positions_evaluated += 1;
                    }
                    result = outcome;
                }
                Step::Descend(child, key) => {
                    stack.push(Frame::new(child, key));
                    self.stats.max_stack_depth = self.stats.max_stack_depth.max(stack.len());
                }
            }
        }

        debug!(
            "rough outcome of {} is {} ({} new positions, {} cached)",
            state,
            result,
            self.stats.positions_evaluated - evaluated_before,
            self.memo.len()
        );
        result
    }

    /// Advance the top frame until it resolves or needs an unknown child.
    fn step(&mut self, frame: &mut Frame<S>) -> Step<S> {
        while let Some(mv) = frame.state.nth_move(frame.next) {
            let child = frame.state.apply_move(&mv);
            let child_key = child.canonical_form();

            match self.memo.get(&child_key) {
                Some(Outcome::Lose) => {
                    self.stats.cache_hits += 1;
                    return Step::Resolved(Outcome::Win);
                }
                Some(_) => {
                    self.stats.cache_hits += 1;
                    frame.next += 1;
                }
                None => return Step::Descend(child, child_key),
            }
        }

        if frame.next == 0 {
            Step::Resolved(Outcome::Lose)
        } else {
            Step::Resolved(Outcome::Draw)
        }
    }
}

/// Estimate `state` with a fresh estimator.
pub fn estimate_rough_outcome<S: GameState>(state: &S) -> Outcome {
    OutcomeEstimator::new().estimate(state)
}
