//! The quadtree board.
//!
//! A `Block` is either a leaf with a colour or an internal node with exactly
//! four children. Children are ordered top-right, top-left, bottom-left,
//! bottom-right. All structural transforms report success with a `bool` and
//! leave the block untouched when they fail.

use rand::seq::SliceRandom;
use rand::Rng;

use super::colour::{Colour, Palette};
use super::path::BlockPath;

/// Rotation direction for a clockwise turn.
pub const ROTATE_CLOCKWISE: u8 = 1;
/// Rotation direction for a counter-clockwise turn.
pub const ROTATE_COUNTER_CLOCKWISE: u8 = 3;
/// Swap direction exchanging the left and right halves.
pub const SWAP_HORIZONTAL: u8 = 0;
/// Swap direction exchanging the top and bottom halves.
pub const SWAP_VERTICAL: u8 = 1;

/// A node of the board quadtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Top-left corner `(x, y)`.
    pub position: (u32, u32),
    /// Side length.
    pub size: u32,
    /// Depth from the root (root = 0).
    pub level: u8,
    /// Depth of unit cells, shared by the whole tree.
    pub max_depth: u8,
    /// Set if and only if this block is a leaf.
    pub colour: Option<Colour>,
    /// Empty for a leaf, otherwise exactly four children.
    pub children: Vec<Block>,
}

impl Block {
    /// Creates a leaf block.
    pub fn new_leaf(position: (u32, u32), size: u32, colour: Colour, level: u8, max_depth: u8) -> Self {
        debug_assert!(level <= max_depth, "level {} exceeds max depth {}", level, max_depth);
        Block {
            position,
            size,
            level,
            max_depth,
            colour: Some(colour),
            children: Vec::new(),
        }
    }

    /// Creates an internal block from four children given in quadrant order.
    /// Children geometry is recomputed from this block's position and size.
    pub fn with_children(position: (u32, u32), size: u32, level: u8, max_depth: u8, children: [Block; 4]) -> Self {
        let mut block = Block {
            position,
            size,
            level,
            max_depth,
            colour: None,
            children: children.into(),
        };
        block.update_geometry(position, size, level);
        block
    }

    /// Generates a random board: a root leaf of a random palette colour,
    /// smashed once.
    pub fn random(size: u32, max_depth: u8, palette: &Palette, rng: &mut impl Rng) -> Self {
        let colour = random_colour(palette, rng);
        let mut board = Block::new_leaf((0, 0), size, colour, 0, max_depth);
        board.smash(palette, rng);
        board
    }

    pub fn is_leaf(&self) -> bool {
        self.colour.is_some()
    }

    /// Side length of one unit cell.
    pub fn unit_size(&self) -> u32 {
        self.size >> (self.max_depth - self.level)
    }

    /// Returns the positions of the four child quadrants, in child order.
    fn children_positions(position: (u32, u32), size: u32) -> [(u32, u32); 4] {
        let (x, y) = position;
        let half = size / 2;
        [(x + half, y), (x, y), (x, y + half), (x + half, y + half)]
    }

    /// Moves this block (and every descendant) to a new location.
    fn update_geometry(&mut self, position: (u32, u32), size: u32, level: u8) {
        self.position = position;
        self.size = size;
        self.level = level;
        let positions = Self::children_positions(position, size);
        for (child, pos) in self.children.iter_mut().zip(positions) {
            child.update_geometry(pos, size / 2, level + 1);
        }
    }

    /// Re-lays out the children after they have been reordered.
    fn update_children_positions(&mut self) {
        let positions = Self::children_positions(self.position, self.size);
        let (size, level) = (self.size / 2, self.level + 1);
        for (child, pos) in self.children.iter_mut().zip(positions) {
            child.update_geometry(pos, size, level);
        }
    }

    /// Rotates the children: 1 = clockwise, 3 = counter-clockwise.
    pub fn rotate(&mut self, direction: u8) -> bool {
        if self.is_leaf() {
            return false;
        }
        match direction {
            // top-left -> top-right -> bottom-right -> bottom-left -> top-left
            ROTATE_CLOCKWISE => self.children.rotate_left(1),
            ROTATE_COUNTER_CLOCKWISE => self.children.rotate_right(1),
            _ => return false,
        }
        self.update_children_positions();
        true
    }

    /// Swaps the children: 0 = left with right, 1 = top with bottom.
    pub fn swap(&mut self, direction: u8) -> bool {
        if self.is_leaf() {
            return false;
        }
        match direction {
            SWAP_HORIZONTAL => {
                self.children.swap(0, 1);
                self.children.swap(2, 3);
            }
            SWAP_VERTICAL => {
                self.children.swap(0, 3);
                self.children.swap(1, 2);
            }
            _ => return false,
        }
        self.update_children_positions();
        true
    }

    /// Replaces a leaf above the maximum depth with four random children.
    ///
    /// A new child at level `l` is smashed again with probability
    /// `exp(-0.25 * l)` unless it is at the maximum depth; otherwise it is a
    /// leaf of a random palette colour.
    pub fn smash(&mut self, palette: &Palette, rng: &mut impl Rng) -> bool {
        if !self.is_leaf() || self.level >= self.max_depth {
            return false;
        }
        let level = self.level + 1;
        let half = self.size / 2;
        let positions = Self::children_positions(self.position, self.size);
        let mut children = Vec::with_capacity(4);
        for pos in positions {
            let mut child = Block::new_leaf(pos, half, random_colour(palette, rng), level, self.max_depth);
            if level < self.max_depth && rng.gen::<f64>() < (-0.25 * level as f64).exp() {
                child.smash(palette, rng);
            }
            children.push(child);
        }
        self.colour = None;
        self.children = children;
        true
    }

    /// Turns a block whose children are all leaves into a single leaf of
    /// the plurality colour. Fails when the plurality is tied.
    pub fn combine(&mut self) -> bool {
        if self.is_leaf() || self.children.iter().any(|c| !c.is_leaf()) {
            return false;
        }
        let mut counts: Vec<(Colour, usize)> = Vec::with_capacity(4);
        for colour in self.children.iter().filter_map(|c| c.colour) {
            match counts.iter_mut().find(|(c, _)| *c == colour) {
                Some((_, n)) => *n += 1,
                None => counts.push((colour, 1)),
            }
        }
        let top = counts.iter().map(|&(_, n)| n).max().unwrap_or(0);
        let mut leaders = counts.iter().filter(|&&(_, n)| n == top);
        match (leaders.next(), leaders.next()) {
            (Some(&(colour, _)), None) => {
                self.colour = Some(colour);
                self.children.clear();
                true
            }
            _ => false,
        }
    }

    /// Recolours a unit-level leaf. Fails if it already has that colour.
    pub fn paint(&mut self, colour: Colour) -> bool {
        if self.level != self.max_depth || self.colour.is_none() || self.colour == Some(colour) {
            return false;
        }
        self.colour = Some(colour);
        true
    }

    /// Resolves a path from this block. Returns `None` if the path runs
    /// past a leaf.
    pub fn get(&self, path: &BlockPath) -> Option<&Block> {
        let mut block = self;
        for i in path.steps() {
            block = block.children.get(i)?;
        }
        Some(block)
    }

    /// Mutable counterpart of [`Block::get`].
    pub fn get_mut(&mut self, path: &BlockPath) -> Option<&mut Block> {
        let mut block = self;
        for i in path.steps() {
            block = block.children.get_mut(i)?;
        }
        Some(block)
    }
}

/// Draws a uniformly random palette colour.
fn random_colour(palette: &Palette, rng: &mut impl Rng) -> Colour {
    let colours = palette.colours();
    debug_assert!(!colours.is_empty(), "palette must not be empty");
    *colours.choose(rng).unwrap_or(&Colour(0, 0, 0))
}
