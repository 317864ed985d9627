//! Move decision.
//!
//! The random strategy commits the first candidate that succeeds on a copy.
//! The greedy strategy runs a fixed number of successful trials and keeps
//! the one with the best net score (goal score minus action penalty),
//! starting from a pass on the root at the untouched board's score. Only a
//! strict improvement replaces the current best.

use log::debug;
use rand::Rng;

use super::action::{Action, Move};
use super::sampler::{choose_random_action, descend_to_random_level, try_apply, Descent};
use crate::board::{Block, BlockPath, Colour, Palette};
use crate::goal::Goal;

/// The outcome of a greedy search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub action: Action,
    pub path: BlockPath,
    pub net_score: i64,
    /// Candidates tried, including those that failed on the copy.
    pub attempts: u64,
}

impl SearchResult {
    pub fn to_move(&self) -> Move {
        Move::new(self.action, self.path.clone())
    }
}

/// Returns the first randomly drawn action that succeeds on a copy of
/// `board`, targeting the matching node of the real board.
///
/// Terminates with probability 1 since pass always succeeds.
pub fn random_move(board: &Block, colour: Colour, palette: &Palette, rng: &mut impl Rng) -> Move {
    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let mut copy = board.clone();
        let Descent { copy: node, path, .. } = descend_to_random_level(board, &mut copy, rng);
        let (action, _) = choose_random_action(rng);
        if try_apply(action, node, colour, palette, rng) {
            debug!("random move {} at {} after {} attempts", action.name(), path, attempts);
            return Move::new(action, path);
        }
    }
}

/// Runs `trials` successful trials against copies of `board` and returns
/// the best one for `goal`. Failed candidates are retried and do not count.
pub fn greedy_search(
    board: &Block,
    goal: &Goal,
    trials: usize,
    palette: &Palette,
    rng: &mut impl Rng,
) -> SearchResult {
    let mut best = SearchResult {
        action: Action::Pass,
        path: BlockPath::root(),
        net_score: i64::from(goal.score(board)),
        attempts: 0,
    };
    let mut remaining = trials;
    while remaining > 0 {
        best.attempts += 1;
        let mut copy = board.clone();
        let Descent { copy: node, path, .. } = descend_to_random_level(board, &mut copy, rng);
        let (action, penalty) = choose_random_action(rng);
        if !try_apply(action, node, goal.colour, palette, rng) {
            continue;
        }
        remaining -= 1;

        let candidate = i64::from(goal.score(&copy)) - i64::from(penalty);
        debug!("trial {} at {}: net {} (best {})", action.name(), path, candidate, best.net_score);
        if candidate > best.net_score {
            best.action = action;
            best.path = path;
            best.net_score = candidate;
        }
    }
    best
}
