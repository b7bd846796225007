//! Index paths address items of a hierarchical list model.
//! The event list is flat, so only paths of depth 0 (root) and 1 (row) mean anything.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexPath(Vec<usize>);

impl IndexPath {
    /// The root path, used to ask for the number of top-level rows.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn row(position: usize) -> Self {
        Self(vec![position])
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of a top-level row, only for paths of depth 1.
    pub fn as_row(&self) -> Option<usize> {
        match self.0.as_slice() {
            [pos] => Some(*pos),
            _ => None,
        }
    }
}

impl From<Vec<usize>> for IndexPath {
    fn from(v: Vec<usize>) -> Self {
        Self(v)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|p| p.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
