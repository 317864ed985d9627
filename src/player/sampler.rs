//! Random move candidates.
//!
//! Candidates are always tried on a private copy of the board: the descent
//! walks the real board and its copy in lock-step so that the real node of
//! a successful trial can be named by its path.

use rand::Rng;

use super::action::Action;
use crate::board::{Block, BlockPath, Colour, Palette};

/// Same-position nodes of the real board and its copy, reached by one
/// random descent.
pub struct Descent<'a, 'b> {
    pub real: &'a Block,
    pub copy: &'b mut Block,
    pub path: BlockPath,
}

/// Walks `board` and `copy` down to a random level in `0..=max_depth`,
/// choosing a uniformly random child at each step. Stops early at a leaf.
pub fn descend_to_random_level<'a, 'b>(
    board: &'a Block,
    copy: &'b mut Block,
    rng: &mut impl Rng,
) -> Descent<'a, 'b> {
    debug_assert_eq!(board.max_depth, copy.max_depth);
    let target = rng.gen_range(0..=board.max_depth);
    let mut real = board;
    let mut copy = copy;
    let mut path = BlockPath::root();
    while target > real.level && !real.is_leaf() {
        let i = rng.gen_range(0..4);
        real = &real.children[i];
        copy = &mut copy.children[i];
        path.push(i);
    }
    Descent { real, copy, path }
}

/// Draws an action uniformly from [`Action::ALL`], with its penalty.
pub fn choose_random_action(rng: &mut impl Rng) -> (Action, u32) {
    let action = Action::ALL[rng.gen_range(0..Action::ALL.len())];
    (action, action.penalty())
}

/// Attempts `action` on `node`, painting with `colour`. Only call this on a
/// copy while searching.
pub fn try_apply(action: Action, node: &mut Block, colour: Colour, palette: &Palette, rng: &mut impl Rng) -> bool {
    action.apply(node, colour, palette, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn descent_reaches_same_position_in_both_trees() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(5);
        let board = Block::random(64, 3, &palette, &mut rng);
        for _ in 0..100 {
            let mut copy = board.clone();
            let descent = descend_to_random_level(&board, &mut copy, &mut rng);
            assert_eq!(descent.real, &*descent.copy);
            assert_eq!(descent.real.level as usize, descent.path.depth());
            assert_eq!(board.get(&descent.path), Some(descent.real));
        }
    }

    #[test]
    fn descent_stops_at_leaf_root() {
        let board = Block::new_leaf((0, 0), 16, crate::board::colour::REAL_RED, 0, 2);
        let mut copy = board.clone();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            let descent = descend_to_random_level(&board, &mut copy, &mut rng);
            assert!(descent.path.is_root());
        }
    }

    #[test]
    fn descent_covers_every_level() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(8);
        // a full tree: every leaf sits at max depth
        let mut board = Block::new_leaf((0, 0), 16, crate::board::colour::REAL_RED, 0, 2);
        board.smash(&palette, &mut rng);
        for child in board.children.iter_mut() {
            child.smash(&palette, &mut rng);
        }
        let mut seen = [false; 3];
        for _ in 0..200 {
            let mut copy = board.clone();
            let descent = descend_to_random_level(&board, &mut copy, &mut rng);
            seen[descent.path.depth()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn descent_leaves_real_board_untouched() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(13);
        let board = Block::random(64, 3, &palette, &mut rng);
        let before = board.clone();
        for _ in 0..50 {
            let mut copy = board.clone();
            let descent = descend_to_random_level(&board, &mut copy, &mut rng);
            let (action, _) = choose_random_action(&mut rng);
            try_apply(action, descent.copy, crate::board::colour::REAL_RED, &palette, &mut rng);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn every_action_is_drawn() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let (action, penalty) = choose_random_action(&mut rng);
            assert_eq!(penalty, action.penalty());
            if !seen.contains(&action) {
                seen.push(action);
            }
        }
        assert_eq!(seen.len(), Action::ALL.len());
    }
}
