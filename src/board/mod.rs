//! Board representation.
//!
//! Contains the quadtree `Block`, colours and the session palette, node
//! paths, and the flattening of a subtree into a grid of unit cells.

pub mod block;
pub mod colour;
pub mod flatten;
pub mod path;

pub use block::{
    Block, ROTATE_CLOCKWISE, ROTATE_COUNTER_CLOCKWISE, SWAP_HORIZONTAL, SWAP_VERTICAL,
};
pub use colour::{Colour, NamedColour, Palette};
pub use flatten::{flatten, grid_side, Grid};
pub use path::BlockPath;
