//! Computer players.
//!
//! A player owns one goal for the session and waits until it is triggered
//! before producing a move. Random players commit the first valid candidate;
//! greedy players search a fixed number of trials for the best net score.

pub mod action;
pub mod sampler;
pub mod search;

use log::info;
use rand::Rng;

use crate::board::{Block, Palette};
use crate::goal::{generate_goals, Goal, GoalError};

pub use action::{Action, Move};
pub use sampler::{choose_random_action, descend_to_random_level, try_apply, Descent};
pub use search::{greedy_search, random_move, SearchResult};

/// The decision strategy of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Random,
    /// Searches `difficulty` successful trials per move.
    Greedy { difficulty: usize },
}

impl PlayerKind {
    pub fn label(self) -> String {
        match self {
            PlayerKind::Random => "random".to_string(),
            PlayerKind::Greedy { difficulty } => format!("greedy({})", difficulty),
        }
    }
}

/// A computer player.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: usize,
    pub goal: Goal,
    pub kind: PlayerKind,
    proceed: bool,
}

impl Player {
    pub fn new(id: usize, goal: Goal, kind: PlayerKind) -> Self {
        Player { id, goal, kind, proceed: false }
    }

    /// Asks the player to produce a move on the next `generate_move` call.
    pub fn trigger(&mut self) {
        self.proceed = true;
    }

    pub fn is_triggered(&self) -> bool {
        self.proceed
    }

    /// Returns a move for `board`, or `None` if the player has not been
    /// triggered. Clears the trigger when a move is returned. `board` is
    /// never modified; the caller commits the move.
    pub fn generate_move(&mut self, board: &Block, palette: &Palette, rng: &mut impl Rng) -> Option<Move> {
        if !self.proceed {
            return None;
        }
        let mv = match self.kind {
            PlayerKind::Random => random_move(board, self.goal.colour, palette, rng),
            PlayerKind::Greedy { difficulty } => {
                let result = greedy_search(board, &self.goal, difficulty, palette, rng);
                info!(
                    "player {} search: {} at {} net {} ({} attempts)",
                    self.id,
                    result.action.name(),
                    result.path,
                    result.net_score,
                    result.attempts
                );
                result.to_move()
            }
        };
        self.proceed = false;
        Some(mv)
    }
}

/// Creates `num_random` random players followed by one greedy player per
/// entry of `difficulties`, each with a distinct goal drawn at random from
/// a freshly generated pool.
pub fn create_players(
    num_random: usize,
    difficulties: &[usize],
    palette: &Palette,
    rng: &mut impl Rng,
) -> Result<Vec<Player>, GoalError> {
    let mut goals = generate_goals(num_random + difficulties.len(), palette, rng)?;
    let kinds = std::iter::repeat(PlayerKind::Random)
        .take(num_random)
        .chain(difficulties.iter().map(|&difficulty| PlayerKind::Greedy { difficulty }));

    let players = kinds
        .enumerate()
        .map(|(id, kind)| {
            let goal = goals.remove(rng.gen_range(0..goals.len()));
            Player::new(id, goal, kind)
        })
        .collect();
    Ok(players)
}
