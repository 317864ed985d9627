//! Paths from the root of a board to one of its nodes.

use std::fmt;

use serde::Serialize;

/// Child indices walked from the root to reach a node. The empty path is
/// the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BlockPath(Vec<u8>);

impl BlockPath {
    pub fn root() -> Self {
        BlockPath(Vec::new())
    }

    /// Appends one step. `index` must be a child index in `0..4`.
    pub fn push(&mut self, index: usize) {
        debug_assert!(index < 4, "child index out of range: {}", index);
        self.0.push(index as u8);
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn steps(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&i| i as usize)
    }
}

impl From<Vec<u8>> for BlockPath {
    fn from(steps: Vec<u8>) -> Self {
        BlockPath(steps)
    }
}

impl fmt::Display for BlockPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "root");
        }
        for (n, step) in self.0.iter().enumerate() {
            if n > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_empty() {
        let path = BlockPath::root();
        assert!(path.is_root());
        assert_eq!(path.depth(), 0);
        assert_eq!(path.to_string(), "root");
    }

    #[test]
    fn display_joins_steps() {
        let mut path = BlockPath::root();
        path.push(1);
        path.push(3);
        assert_eq!(path.to_string(), "1.3");
        assert_eq!(path.steps().collect::<Vec<_>>(), vec![1, 3]);
    }
}
