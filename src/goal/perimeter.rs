//! Perimeter scoring.

use crate::board::{Colour, Grid};

/// Counts border cells of `colour`.
///
/// For every index `i` the top and bottom cells of column `i` and the left
/// and right cells of row `i` are tested independently, so a matching corner
/// counts twice. On a single-cell grid the one cell is tested four times.
pub fn perimeter_score(grid: &Grid, colour: Colour) -> u32 {
    let side = grid.len();
    if side == 0 {
        return 0;
    }
    let last = side - 1;
    let mut score = 0;
    for i in 0..side {
        for j in [0, last] {
            if grid[i][j] == colour {
                score += 1;
            }
            if grid[j][i] == colour {
                score += 1;
            }
        }
    }
    score
}
