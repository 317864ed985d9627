//! Board materialization.
//!
//! Converts a block subtree into a dense, column-major grid of unit-cell
//! colours: `grid[i][j]` is the cell at column `i`, row `j`, and
//! `grid[0][0]` is the top-left cell.

use super::block::Block;
use super::colour::Colour;

/// A square, column-major grid of unit-cell colours.
pub type Grid = Vec<Vec<Colour>>;

/// Side length, in unit cells, of the grid for `block`.
pub fn grid_side(block: &Block) -> usize {
    debug_assert!(
        block.level <= block.max_depth,
        "level {} exceeds max depth {}",
        block.level,
        block.max_depth
    );
    1usize << (block.max_depth - block.level)
}

/// Flattens `block` into a grid of side `2^(max_depth - level)`.
///
/// Each child subtree is flattened exactly once; the left half of the result
/// stacks the top-left child above the bottom-left child, the right half
/// stacks the top-right child above the bottom-right child.
pub fn flatten(block: &Block) -> Grid {
    let side = grid_side(block);
    if let Some(colour) = block.colour {
        return vec![vec![colour; side]; side];
    }

    debug_assert_eq!(block.children.len(), 4, "internal block must have four children");
    let mut quadrants = block.children.iter().map(flatten);
    let (top_right, top_left, bottom_left, bottom_right) = match (
        quadrants.next(),
        quadrants.next(),
        quadrants.next(),
        quadrants.next(),
    ) {
        (Some(tr), Some(tl), Some(bl), Some(br)) => (tr, tl, bl, br),
        _ => return Vec::new(),
    };

    let mut grid = Vec::with_capacity(side);
    stack_columns(&mut grid, top_left, bottom_left);
    stack_columns(&mut grid, top_right, bottom_right);
    grid
}

/// Appends the columns of `top` extended by the matching columns of `bottom`.
fn stack_columns(grid: &mut Grid, top: Grid, bottom: Grid) {
    for (mut column, lower) in top.into_iter().zip(bottom) {
        column.extend(lower);
        grid.push(column);
    }
}
