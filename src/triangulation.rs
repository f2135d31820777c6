use std::cmp::Ordering;

use hashbrown::{HashMap, HashSet};

use crate::{DelaunayNum, IndexedEdge, IndexedTriangle, Point2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangulation stored as two flat arenas: a list of vertex positions and a list of
/// triangles referring to those positions by index.
///
/// Triangulations are created by [crate::triangulate] or a
/// [DelaunayTriangulator](crate::DelaunayTriangulator) and are read-only afterwards.
///
/// # Indices
/// A vertex index is the vertex's position in [vertices](Self::vertices). Every index
/// stored in a triangle is smaller than [num_vertices](Self::num_vertices).
///
/// The vertex list is sorted by increasing x coordinate when the triangulation is created.
/// Points sharing an x coordinate keep their input order. This order carries no further
/// meaning and callers should not rely on it to locate points.
///
/// # Example
/// ```
/// use bourke_delaunay::{triangulate, Point2};
///
/// # fn main() -> Result<(), bourke_delaunay::TriangulationError> {
/// let triangulation = triangulate(vec![
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 2.0),
/// ])?;
///
/// assert_eq!(triangulation.num_vertices(), 3);
/// assert_eq!(triangulation.num_triangles(), 1);
/// // Vertices are ordered by their x coordinate
/// assert_eq!(triangulation.vertex(0), Point2::new(0.0, 0.0));
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Triangulation<S = f64> {
    vertices: Vec<Point2<S>>,
    triangles: Vec<IndexedTriangle<S>>,
}

impl<S: DelaunayNum> Triangulation<S> {
    pub(crate) fn new(mut vertices: Vec<Point2<S>>) -> Self {
        vertices.sort_by(|l, r| l.x.partial_cmp(&r.x).unwrap_or(Ordering::Equal));
        Triangulation {
            vertices,
            triangles: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// All vertex positions, indexed by vertex index.
    pub fn vertices(&self) -> &[Point2<S>] {
        &self.vertices
    }

    /// Returns the position of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.num_vertices()`.
    pub fn vertex(&self, index: usize) -> Point2<S> {
        self.vertices[index]
    }

    /// All triangles in no particular order.
    pub fn triangles(&self) -> &[IndexedTriangle<S>] {
        &self.triangles
    }

    /// Returns a triangle.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.num_triangles()`.
    pub fn triangle(&self, index: usize) -> &IndexedTriangle<S> {
        &self.triangles[index]
    }

    pub(crate) fn add_vertex(&mut self, vertex: Point2<S>) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub(crate) fn add_triangle(&mut self, p1: usize, p2: usize, p3: usize) {
        let triangle = IndexedTriangle::new(&self.vertices, p1, p2, p3);
        self.triangles.push(triangle);
    }

    /// Removes a vertex, shifting the index of every later vertex down by one.
    ///
    /// Triangles are not updated. Callers must make sure no triangle refers to
    /// `index` or any later vertex.
    pub(crate) fn remove_vertex(&mut self, index: usize) -> Point2<S> {
        debug_assert!(self
            .triangles
            .iter()
            .all(|t| t.vertices().iter().all(|&v| v < index)));
        self.vertices.remove(index)
    }

    /// Keeps only the triangles for which `f` returns `true`. The survivors are compacted
    /// to the front of the triangle list, keeping their relative order.
    pub(crate) fn retain_triangles(&mut self, f: impl FnMut(&IndexedTriangle<S>) -> bool) {
        self.triangles.retain(f);
    }

    /// Returns the set of all undirected edges.
    pub fn undirected_edges(&self) -> HashSet<IndexedEdge> {
        self.triangles
            .iter()
            .flat_map(|triangle| triangle.edges())
            .collect()
    }

    /// Returns the number of undirected edges.
    pub fn num_undirected_edges(&self) -> usize {
        self.undirected_edges().len()
    }

    /// Returns all edges that are adjacent to exactly one triangle.
    ///
    /// For a triangulation built by the Delaunay triangulator these edges form the convex
    /// hull of the input. Each edge keeps the direction of its triangle, so hull edges run
    /// counter clockwise. The order of the returned edges is unspecified.
    pub fn convex_hull_edges(&self) -> Vec<IndexedEdge> {
        let mut occurrences: HashMap<IndexedEdge, (IndexedEdge, usize)> = HashMap::new();
        for edge in self.triangles.iter().flat_map(|triangle| triangle.edges()) {
            occurrences.entry(edge).or_insert((edge, 0)).1 += 1;
        }

        occurrences
            .into_values()
            .filter(|(_, count)| *count == 1)
            .map(|(edge, _)| edge)
            .collect()
    }

    /// Searches for a triangle whose circumcircle strictly contains another vertex.
    ///
    /// Returns the index of the offending triangle and the index of the contained vertex.
    /// Runs in `O(num_triangles * num_vertices)`.
    pub fn find_delaunay_violation(&self) -> Option<(usize, usize)> {
        self.triangles
            .iter()
            .enumerate()
            .find_map(|(triangle_index, triangle)| {
                self.vertices
                    .iter()
                    .enumerate()
                    .find(|(vertex_index, position)| {
                        !triangle.contains_vertex(*vertex_index)
                            && triangle.in_circumcircle(**position)
                    })
                    .map(|(vertex_index, _)| (triangle_index, vertex_index))
            })
    }

    /// Returns `true` if no vertex lies strictly inside the circumcircle of any triangle.
    pub fn is_delaunay(&self) -> bool {
        self.find_delaunay_violation().is_none()
    }
}
