//! Actions and moves.
//!
//! An `Action` is one of the eight structural choices a player can make. A
//! `Move` pairs an action with the node of the real board it targets.

use rand::Rng;

use crate::board::{
    Block, BlockPath, Colour, Palette, ROTATE_CLOCKWISE, ROTATE_COUNTER_CLOCKWISE,
    SWAP_HORIZONTAL, SWAP_VERTICAL,
};

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RotateClockwise,
    RotateCounterClockwise,
    SwapHorizontal,
    SwapVertical,
    Smash,
    Paint,
    Combine,
    Pass,
}

impl Action {
    /// Every action, in the order the sampler draws from.
    pub const ALL: [Action; 8] = [
        Action::RotateClockwise,
        Action::RotateCounterClockwise,
        Action::SwapHorizontal,
        Action::SwapVertical,
        Action::Smash,
        Action::Paint,
        Action::Combine,
        Action::Pass,
    ];

    /// The action kind as shown to players.
    pub const fn name(self) -> &'static str {
        match self {
            Action::RotateClockwise | Action::RotateCounterClockwise => "rotate",
            Action::SwapHorizontal | Action::SwapVertical => "swap",
            Action::Smash => "smash",
            Action::Paint => "paint",
            Action::Combine => "combine",
            Action::Pass => "pass",
        }
    }

    /// Direction parameter for rotations and swaps.
    pub const fn direction(self) -> Option<u8> {
        match self {
            Action::RotateClockwise => Some(ROTATE_CLOCKWISE),
            Action::RotateCounterClockwise => Some(ROTATE_COUNTER_CLOCKWISE),
            Action::SwapHorizontal => Some(SWAP_HORIZONTAL),
            Action::SwapVertical => Some(SWAP_VERTICAL),
            _ => None,
        }
    }

    /// Flat score penalty charged for a successful action.
    pub const fn penalty(self) -> u32 {
        match self {
            Action::Smash => 3,
            Action::Paint | Action::Combine => 1,
            _ => 0,
        }
    }

    /// Applies this action to `block`. Paint uses `colour`, smash draws from
    /// `palette`. Pass always succeeds and changes nothing.
    pub fn apply(self, block: &mut Block, colour: Colour, palette: &Palette, rng: &mut impl Rng) -> bool {
        match self {
            Action::RotateClockwise => block.rotate(ROTATE_CLOCKWISE),
            Action::RotateCounterClockwise => block.rotate(ROTATE_COUNTER_CLOCKWISE),
            Action::SwapHorizontal => block.swap(SWAP_HORIZONTAL),
            Action::SwapVertical => block.swap(SWAP_VERTICAL),
            Action::Smash => block.smash(palette, rng),
            Action::Paint => block.paint(colour),
            Action::Combine => block.combine(),
            Action::Pass => true,
        }
    }
}

/// A committed move: an action against a node of the real board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub action: Action,
    pub target: BlockPath,
}

impl Move {
    pub fn new(action: Action, target: BlockPath) -> Self {
        Move { action, target }
    }

    /// Resolves the targeted node on `board`.
    pub fn target_block<'a>(&self, board: &'a Block) -> Option<&'a Block> {
        board.get(&self.target)
    }

    /// Commits this move to `board`. Returns false if the target does not
    /// exist or the action fails on it.
    pub fn apply(&self, board: &mut Block, colour: Colour, palette: &Palette, rng: &mut impl Rng) -> bool {
        match board.get_mut(&self.target) {
            Some(block) => self.action.apply(block, colour, palette, rng),
            None => false,
        }
    }
}
