//! Player goals.
//!
//! A goal pairs a target colour with a scoring strategy. Scores are computed
//! from a fresh flattening of the board on every call.

pub mod blob;
pub mod perimeter;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{flatten, Block, Colour, Palette};

pub use blob::blob_score;
pub use perimeter::perimeter_score;

/// Errors that can occur while generating goals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalError {
    #[error("requested {requested} goals but the palette only has {available} colours")]
    NotEnoughColours { requested: usize, available: usize },
}

/// The scoring strategy of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Perimeter,
    Blob,
}

impl GoalKind {
    pub const ALL: [GoalKind; 2] = [GoalKind::Perimeter, GoalKind::Blob];

    /// Human-readable description for a goal of this kind.
    pub fn describe(self, colour_name: &str) -> String {
        match self {
            GoalKind::Perimeter => format!("Place as many {} units on the perimeter!", colour_name),
            GoalKind::Blob => format!("Connect as many {} units together!", colour_name),
        }
    }
}

/// A player's scoring objective for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Goal {
    pub kind: GoalKind,
    pub colour: Colour,
}

impl Goal {
    pub fn new(kind: GoalKind, colour: Colour) -> Self {
        Goal { kind, colour }
    }

    /// Scores `board` for this goal. Always non-negative.
    pub fn score(&self, board: &Block) -> u32 {
        let grid = flatten(board);
        match self.kind {
            GoalKind::Perimeter => perimeter_score(&grid, self.colour),
            GoalKind::Blob => blob_score(&grid, self.colour),
        }
    }

    pub fn description(&self, palette: &Palette) -> String {
        self.kind.describe(&palette.colour_name(self.colour))
    }
}

/// Generates `num_goals` goals of one randomly chosen kind, each with a
/// distinct colour drawn from `palette`.
pub fn generate_goals(num_goals: usize, palette: &Palette, rng: &mut impl Rng) -> Result<Vec<Goal>, GoalError> {
    let mut pool = palette.colours();
    if num_goals > pool.len() {
        return Err(GoalError::NotEnoughColours {
            requested: num_goals,
            available: pool.len(),
        });
    }
    let kind = GoalKind::ALL[rng.gen_range(0..GoalKind::ALL.len())];
    let goals = (0..num_goals)
        .map(|_| Goal::new(kind, pool.remove(rng.gen_range(0..pool.len()))))
        .collect();
    Ok(goals)
}
