use num_traits::Float;

use super::math;
use super::IndexedEdge;
use crate::{DelaunayNum, Point2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle referring to its corners by vertex index.
///
/// The corner positions are captured once, when the triangle is created, and are used to
/// answer circumcircle queries without going back to the vertex arena. The snapshot is
/// never refreshed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct IndexedTriangle<S = f64> {
    /// Index of the first corner
    pub p1: usize,
    /// Index of the second corner
    pub p2: usize,
    /// Index of the third corner
    pub p3: usize,
    positions: [Point2<S>; 3],
}

impl<S: DelaunayNum> IndexedTriangle<S> {
    /// Creates a triangle from three indices into `vertices`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn new(vertices: &[Point2<S>], p1: usize, p2: usize, p3: usize) -> Self {
        IndexedTriangle {
            p1,
            p2,
            p3,
            positions: [vertices[p1], vertices[p2], vertices[p3]],
        }
    }

    /// The three corner indices in storage order.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// The corner positions as they were when this triangle was created.
    #[inline]
    pub fn positions(&self) -> [Point2<S>; 3] {
        self.positions
    }

    /// The edges `p1 -> p2`, `p2 -> p3` and `p3 -> p1`.
    #[inline]
    pub fn edges(&self) -> [IndexedEdge; 3] {
        [
            IndexedEdge::new(self.p1, self.p2),
            IndexedEdge::new(self.p2, self.p3),
            IndexedEdge::new(self.p3, self.p1),
        ]
    }

    /// Returns `true` if `vertex` is one of the corners.
    #[inline]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        self.p1 == vertex || self.p2 == vertex || self.p3 == vertex
    }

    /// Returns `true` if `point` lies strictly inside this triangle's circumcircle.
    ///
    /// Points on the circle are not contained. Degenerate (collinear) triangles contain
    /// nothing.
    pub fn in_circumcircle(&self, point: Point2<S>) -> bool {
        let [v1, v2, v3] = self.positions;
        math::contained_in_circumference(v1, v2, v3, point)
    }

    /// Returns `true` if the corners are ordered counter clockwise.
    pub fn is_ccw(&self) -> bool {
        let [v1, v2, v3] = self.positions;
        math::side_query(v1, v2, v3).is_on_left_side()
    }

    /// Returns `true` if all three corners are collinear.
    pub fn is_degenerate(&self) -> bool {
        let [v1, v2, v3] = self.positions;
        math::side_query(v1, v2, v3).is_on_line()
    }

    /// The unsigned area of the triangle.
    pub fn area(&self) -> S {
        math::triangle_area(self.positions)
    }
}

impl<S: DelaunayNum + Float> IndexedTriangle<S> {
    /// Returns the circumcenter and squared circumradius.
    pub fn circumcircle(&self) -> (Point2<S>, S) {
        math::circumcenter(self.positions)
    }
}
