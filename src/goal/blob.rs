//! Blob scoring.
//!
//! The score is the size of the largest 4-connected group of cells of the
//! goal colour. Neighbours are `(i ± 1, j)` and `(i, j ± 1)` with a negative
//! coordinate folded to its absolute value, so the low edge steps back onto
//! index 1 rather than stopping. Coordinates at or beyond the side length
//! end the branch.

use crate::board::{Colour, Grid};

/// Per-cell flood-fill state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Miss,
    Hit,
}

/// Returns the size of the largest blob of `colour` in `grid`.
pub fn blob_score(grid: &Grid, colour: Colour) -> u32 {
    let side = grid.len();
    let mut visited = vec![vec![Visit::Unvisited; side]; side];
    let mut largest = 0;
    for i in 0..side {
        for j in 0..side {
            let size = undiscovered_blob_size((i, j), grid, colour, &mut visited);
            largest = largest.max(size);
        }
    }
    largest
}

/// Flood-fills from `seed`, marking every reached cell, and returns the
/// number of newly discovered cells of `colour`.
///
/// Uses an explicit stack; the set of cells reached is the same as the
/// recursive walk, so component sizes are unchanged.
fn undiscovered_blob_size(
    seed: (usize, usize),
    grid: &Grid,
    colour: Colour,
    visited: &mut [Vec<Visit>],
) -> u32 {
    let side = grid.len();
    let mut size = 0;
    let mut stack = vec![seed];
    while let Some((i, j)) = stack.pop() {
        if i >= side || j >= side || visited[i][j] != Visit::Unvisited {
            continue;
        }
        if grid[i][j] != colour {
            visited[i][j] = Visit::Miss;
            continue;
        }
        visited[i][j] = Visit::Hit;
        size += 1;
        stack.push((fold_down(i), j));
        stack.push((i + 1, j));
        stack.push((i, fold_down(j)));
        stack.push((i, j + 1));
    }
    size
}

/// `abs(k - 1)`: index 0 folds onto 1.
fn fold_down(k: usize) -> usize {
    if k == 0 {
        1
    } else {
        k - 1
    }
}
