use hashbrown::HashMap;
use thiserror::Error;

use crate::math::{self, validate_vertex, InsertionError};
use crate::{DelaunayNum, IndexedEdge, IndexedTriangle, Point2, Triangulation};

/// The error type returned when a point set cannot be triangulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TriangulationError {
    /// Fewer than three points were given.
    #[error("need at least three vertices for triangulation, got {count}")]
    InsufficientVertices {
        /// The number of points that were given.
        count: usize,
    },

    /// A point cannot be handled by the exact predicates.
    ///
    /// *See [validate_coordinate](crate::math::validate_coordinate)*
    #[error("vertex {index} has an invalid coordinate: {source}")]
    InvalidCoordinate {
        /// The position of the point in the input sequence.
        index: usize,
        /// Why the coordinate was rejected.
        source: InsertionError,
    },

    /// Two points share the same position and [DuplicatePolicy::Reject] is in use.
    #[error("vertex {duplicate} has the same position as vertex {first}")]
    DuplicateVertex {
        /// The input position of the first occurrence.
        first: usize,
        /// The input position of the repeated point.
        duplicate: usize,
    },
}

/// Determines how coincident input points are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// Keep every point in the vertex list.
    ///
    /// Only the copy that comes first in the sorted vertex list becomes part of any
    /// triangle. Later copies lie on, never strictly inside, the circumcircles around
    /// their twin and remain unreferenced.
    #[default]
    Keep,

    /// Fail with [TriangulationError::DuplicateVertex].
    Reject,
}

/// Controls how a [DelaunayTriangulator] runs.
///
/// The following parameters will be used by `Self::default` and [Self::new]:
/// * `duplicate_policy`: [DuplicatePolicy::Keep]
///
/// # Example
///
/// ```
/// use bourke_delaunay::{DelaunayTriangulator, DuplicatePolicy, TriangulatorParameters};
///
/// let parameters = TriangulatorParameters::new().with_duplicate_policy(DuplicatePolicy::Reject);
///
/// let triangulator = DelaunayTriangulator::with_parameters(parameters);
/// assert!(triangulator.triangulate::<f64, _, _>([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).is_ok());
/// assert!(triangulator.triangulate::<f64, _, _>([[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TriangulatorParameters {
    duplicate_policy: DuplicatePolicy,
}

impl TriangulatorParameters {
    /// Creates a new set of `TriangulatorParameters`.
    ///
    /// Refer to the [struct definition](Self) for more information.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how coincident points are treated. Defaults to [DuplicatePolicy::Keep].
    pub fn with_duplicate_policy(mut self, duplicate_policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = duplicate_policy;
        self
    }

    /// Returns the configured duplicate policy.
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }
}

/// Computes Delaunay triangulations by incremental insertion into a super triangle.
///
/// This is the classical Bowyer-Watson scheme (see also Paul Bourke, "An Algorithm for
/// Interpolating Irregularly-Spaced Data with Applications in Terrain Modelling"):
///
/// 1. Sort the points by x and enclose them in a super triangle.
/// 2. Insert the points one at a time. Every triangle whose circumcircle strictly contains
///    the new point is removed. Edges shared by two removed triangles cancel out, the
///    remaining edges bound the cavity and are connected to the new point.
/// 3. Remove every triangle touching the super triangle, then the super triangle's
///    scaffolding vertex.
///
/// The super triangle is symbolic. Its corners are pushed infinitely far away and merge
/// into a single scaffolding vertex at infinity, so a triangle touching it has one finite
/// edge `a -> b`, with the vertex at infinity to its left. The "circumcircle" of such a
/// triangle is the open half plane left of `a -> b` together with the open segment
/// between `a` and `b`. No input point can ever fall outside the super triangle or pull
/// a hull triangle apart. The symbolic triangle cannot enclose a point set without area,
/// so the insertion starts from the first three non collinear input points instead.
///
/// Each insertion scans all triangles, so the worst case running time is quadratic.
/// All predicates are exact.
///
/// The returned [Triangulation] contains exactly the input points. All of its triangles
/// are ordered counter clockwise and together they cover the convex hull of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DelaunayTriangulator {
    parameters: TriangulatorParameters,
}

impl DelaunayTriangulator {
    /// Creates a triangulator using the default [TriangulatorParameters].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a triangulator using custom parameters.
    pub fn with_parameters(parameters: TriangulatorParameters) -> Self {
        Self { parameters }
    }

    /// Returns the parameters used by this triangulator.
    pub fn parameters(&self) -> &TriangulatorParameters {
        &self.parameters
    }

    /// Triangulates a point set.
    ///
    /// # Errors
    ///
    /// * [TriangulationError::InsufficientVertices] for fewer than three points
    /// * [TriangulationError::InvalidCoordinate] for NaN, infinite or out of range coordinates
    /// * [TriangulationError::DuplicateVertex] for coincident points, if rejected by the
    ///   [DuplicatePolicy]
    ///
    /// Degenerate inputs are not rejected: if all points are collinear, the result
    /// contains no triangles.
    pub fn triangulate<S, I, P>(&self, points: I) -> Result<Triangulation<S>, TriangulationError>
    where
        S: DelaunayNum,
        I: IntoIterator<Item = P>,
        P: Into<Point2<S>>,
    {
        let points: Vec<Point2<S>> = points.into_iter().map(Into::into).collect();
        let num_points = points.len();
        if num_points < 3 {
            return Err(TriangulationError::InsufficientVertices { count: num_points });
        }

        for (index, point) in points.iter().enumerate() {
            validate_vertex(point)
                .map_err(|source| TriangulationError::InvalidCoordinate { index, source })?;
        }

        if self.parameters.duplicate_policy == DuplicatePolicy::Reject {
            check_duplicates(&points)?;
        }

        tracing::debug!(num_points, "starting incremental Delaunay triangulation");

        let mut triangulation = Triangulation::new(points);
        let Some(seed) = find_seed_triangle(triangulation.vertices()) else {
            tracing::debug!("all vertices are collinear, no triangles created");
            return Ok(triangulation);
        };

        // The scaffolding vertex only needs a valid slot in the arena, its position is
        // never read.
        let infinite = triangulation.add_vertex(triangulation.vertex(seed[0]));
        let [a, b, c] = seed;
        triangulation.add_triangle(a, b, c);
        triangulation.add_triangle(b, a, infinite);
        triangulation.add_triangle(c, b, infinite);
        triangulation.add_triangle(a, c, infinite);

        let mut edges: Vec<IndexedEdge> = Vec::new();
        for index in (0..num_points).filter(|index| !seed.contains(index)) {
            let point = triangulation.vertex(index);

            edges.clear();
            triangulation.retain_triangles(|triangle| {
                if cavity_contains(triangle, infinite, point) {
                    edges.extend(triangle.edges());
                    false
                } else {
                    true
                }
            });

            cancel_shared_edges(&mut edges);

            tracing::trace!(vertex = index, cavity_boundary = edges.len(), "inserting vertex");

            for edge in &edges {
                triangulation.add_triangle(edge.p1, edge.p2, index);
            }
        }

        triangulation.retain_triangles(|triangle| !triangle.contains_vertex(infinite));
        triangulation.remove_vertex(infinite);

        tracing::debug!(
            num_vertices = triangulation.num_vertices(),
            num_triangles = triangulation.num_triangles(),
            "finished incremental Delaunay triangulation"
        );

        Ok(triangulation)
    }
}

/// Triangulates a point set using the default [TriangulatorParameters].
///
/// # Example
/// ```
/// use bourke_delaunay::{triangulate, Point2, TriangulationError};
///
/// let triangulation = triangulate(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ])?;
///
/// // A square with its center splits into four triangles
/// assert_eq!(triangulation.num_triangles(), 4);
/// assert!(triangulation.is_delaunay());
///
/// assert_eq!(
///     triangulate(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]).unwrap_err(),
///     TriangulationError::InsufficientVertices { count: 2 }
/// );
/// # Ok::<(), TriangulationError>(())
/// ```
pub fn triangulate<S, I>(points: I) -> Result<Triangulation<S>, TriangulationError>
where
    S: DelaunayNum,
    I: IntoIterator<Item = Point2<S>>,
{
    DelaunayTriangulator::new().triangulate(points)
}

/// Returns the first three non collinear vertices, ordered counter clockwise.
///
/// Vertices are picked in index order: the first vertex, the first vertex at a different
/// position and the first vertex off the line through both.
fn find_seed_triangle<S: DelaunayNum>(vertices: &[Point2<S>]) -> Option<[usize; 3]> {
    let first = vertices[0];
    let second = vertices.iter().position(|vertex| *vertex != first)?;
    let (third, side) = vertices
        .iter()
        .enumerate()
        .skip(second + 1)
        .map(|(index, vertex)| (index, math::side_query(first, vertices[second], *vertex)))
        .find(|(_, side)| !side.is_on_line())?;

    if side.is_on_left_side() {
        Some([0, second, third])
    } else {
        Some([0, third, second])
    }
}

/// Returns `true` if `point` lies strictly inside the circumcircle of `triangle`.
///
/// Triangles touching the vertex at infinity use the limit of their circumcircle: the open
/// half plane left of their finite edge plus the open finite edge itself.
fn cavity_contains<S: DelaunayNum>(
    triangle: &IndexedTriangle<S>,
    infinite: usize,
    point: Point2<S>,
) -> bool {
    let [v1, v2, v3] = triangle.positions();
    let (from, to) = match triangle.vertices() {
        [_, _, p3] if p3 == infinite => (v1, v2),
        [p1, _, _] if p1 == infinite => (v2, v3),
        [_, p2, _] if p2 == infinite => (v3, v1),
        _ => return triangle.in_circumcircle(point),
    };

    let side = math::side_query(from, to, point);
    side.is_on_left_side() || (side.is_on_line() && is_strictly_between(from, to, point))
}

/// Checks if a point on the line through `from` and `to` lies strictly between them.
fn is_strictly_between<S: DelaunayNum>(from: Point2<S>, to: Point2<S>, point: Point2<S>) -> bool {
    let within = |a: S, b: S, value: S| (a <= value && value <= b) || (b <= value && value <= a);
    point != from
        && point != to
        && within(from.x, to.x, point.x)
        && within(from.y, to.y, point.y)
}

/// Removes both edges of every pair of equal edges.
///
/// The edges of all triangles in a cavity contain each interior edge twice and each
/// boundary edge once. The survivors keep their order and direction.
fn cancel_shared_edges(edges: &mut Vec<IndexedEdge>) {
    let mut unmatched: HashMap<IndexedEdge, usize> = HashMap::with_capacity(edges.len());
    let mut keep = vec![true; edges.len()];
    for (index, edge) in edges.iter().enumerate() {
        if let Some(partner) = unmatched.remove(edge) {
            keep[partner] = false;
            keep[index] = false;
        } else {
            unmatched.insert(*edge, index);
        }
    }

    let mut keep = keep.into_iter();
    edges.retain(|_| keep.next().unwrap_or(false));
}

fn check_duplicates<S: DelaunayNum>(points: &[Point2<S>]) -> Result<(), TriangulationError> {
    let mut seen: HashMap<(u64, u64), usize> = HashMap::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let (x, y): (f64, f64) = (point.x.into(), point.y.into());
        // Adding zero maps -0.0 to 0.0
        let key = ((x + 0.0).to_bits(), (y + 0.0).to_bits());
        if let Some(&first) = seen.get(&key) {
            return Err(TriangulationError::DuplicateVertex {
                first,
                duplicate: index,
            });
        }
        seen.insert(key, index);
    }
    Ok(())
}
