use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An undirected edge between two vertex indices.
///
/// Equality and hashing ignore the direction: `IndexedEdge::new(a, b)` equals
/// `IndexedEdge::new(b, a)`. The original direction is kept so that a cavity boundary
/// retains the winding of the triangles it was taken from.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct IndexedEdge {
    /// The index of the first vertex
    pub p1: usize,
    /// The index of the second vertex
    pub p2: usize,
}

impl IndexedEdge {
    /// Creates a new edge from `p1` to `p2`.
    #[inline]
    pub const fn new(p1: usize, p2: usize) -> Self {
        IndexedEdge { p1, p2 }
    }

    /// Returns both vertex indices, smaller index first.
    #[inline]
    pub fn normalized(&self) -> (usize, usize) {
        if self.p1 <= self.p2 {
            (self.p1, self.p2)
        } else {
            (self.p2, self.p1)
        }
    }

    /// Returns the same edge pointing in the opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        IndexedEdge::new(self.p2, self.p1)
    }

    /// Returns `true` if `vertex` is one of the edge's end points.
    #[inline]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        self.p1 == vertex || self.p2 == vertex
    }
}

impl PartialEq for IndexedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for IndexedEdge {}

impl Hash for IndexedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}
