//! Shape quality scoring for triangular meshes.
//!
//! The quality of a triangle with area `A` and perimeter `P` is
//! `(36 / sqrt(3)) * A / P²`. An equilateral triangle scores 1, needles and slivers score
//! close to 0. The score does not depend on the triangle's size.
//!
//! [TriangulationQualityImprover] scores every face of a [PolygonMesh] and hands the faces,
//! worst first, to an [ImprovementPolicy]. The crate does not modify meshes itself: the
//! default policy, [NoImprovement], stops right away.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::ControlFlow;

use smallvec::SmallVec;
use thiserror::Error;

use crate::math::{triangle_area, triangle_perimeter};
use crate::{DelaunayNum, HasPosition, Point2, Triangulation};

/// `36 / sqrt(3)`
const QUALITY_FACTOR: f64 = 20.784609690826528;

/// The error type used by the quality pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum QualityError {
    /// The quality measure is only defined for triangles.
    #[error("face {face} must be triangular, but has {edge_count} edges")]
    NonTriangularFace {
        /// The offending face.
        face: usize,
        /// The number of edges of the offending face.
        edge_count: usize,
    },

    /// A face index does not refer to a face of the mesh.
    #[error("face {face} does not exist, the mesh has {num_faces} faces")]
    FaceOutOfRange {
        /// The requested face.
        face: usize,
        /// The number of faces of the mesh.
        num_faces: usize,
    },
}

/// A read-only view on a mesh made of polygonal faces.
///
/// Faces are identified by an index in `0..num_faces()`. The positions of a face are
/// listed in the order its boundary is traversed.
pub trait PolygonMesh {
    /// The coordinate type of the mesh's vertices.
    type Scalar: DelaunayNum;

    /// Returns the number of faces.
    fn num_faces(&self) -> usize;

    /// Returns the number of edges bounding a face.
    fn face_edge_count(&self, face: usize) -> usize;

    /// Returns the positions of a face's vertices.
    fn face_positions(&self, face: usize) -> SmallVec<[Point2<Self::Scalar>; 4]>;
}

impl<S: DelaunayNum> PolygonMesh for Triangulation<S> {
    type Scalar = S;

    fn num_faces(&self) -> usize {
        self.num_triangles()
    }

    fn face_edge_count(&self, _: usize) -> usize {
        3
    }

    fn face_positions(&self, face: usize) -> SmallVec<[Point2<S>; 4]> {
        let vertices = self.vertices();
        self.triangle(face)
            .vertices()
            .iter()
            .map(|&vertex| vertices[vertex])
            .collect()
    }
}

/// A minimal polygon mesh: a vertex list and faces given as cycles of vertex indices.
///
/// Faces may have any number of corners. Only triangular faces can be scored.
///
/// # Example
/// ```
/// use bourke_delaunay::{IndexedMesh, Point2, PolygonMesh};
///
/// let mut mesh = IndexedMesh::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]);
/// let quad = mesh.add_face([0, 1, 2, 3]);
/// assert_eq!(mesh.face_edge_count(quad), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndexedMesh<V> {
    vertices: Vec<V>,
    faces: Vec<SmallVec<[usize; 4]>>,
}

impl<V: HasPosition> IndexedMesh<V> {
    /// Creates a mesh without faces.
    pub fn new(vertices: Vec<V>) -> Self {
        Self {
            vertices,
            faces: Vec::new(),
        }
    }

    /// Adds a face and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if a vertex index is out of bounds.
    pub fn add_face(&mut self, vertices: impl IntoIterator<Item = usize>) -> usize {
        let face: SmallVec<[usize; 4]> = vertices.into_iter().collect();
        for &vertex in &face {
            assert!(
                vertex < self.vertices.len(),
                "Vertex index {} out of bounds, the mesh has {} vertices",
                vertex,
                self.vertices.len()
            );
        }
        self.faces.push(face);
        self.faces.len() - 1
    }

    /// All vertices of the mesh.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// The vertex indices of a face.
    pub fn face(&self, face: usize) -> &[usize] {
        &self.faces[face]
    }
}

impl<S: DelaunayNum> From<&Triangulation<S>> for IndexedMesh<Point2<S>> {
    fn from(triangulation: &Triangulation<S>) -> Self {
        let mut mesh = IndexedMesh::new(triangulation.vertices().to_vec());
        for triangle in triangulation.triangles() {
            mesh.add_face(triangle.vertices());
        }
        mesh
    }
}

impl<V: HasPosition> PolygonMesh for IndexedMesh<V> {
    type Scalar = V::Scalar;

    fn num_faces(&self) -> usize {
        self.faces.len()
    }

    fn face_edge_count(&self, face: usize) -> usize {
        self.faces[face].len()
    }

    fn face_positions(&self, face: usize) -> SmallVec<[Point2<V::Scalar>; 4]> {
        self.faces[face]
            .iter()
            .map(|&vertex| self.vertices[vertex].position())
            .collect()
    }
}

/// Returns the quality of a triangle, ranging from 0 (degenerate) to 1 (equilateral).
///
/// Triangles whose corners all coincide score 0.
///
/// # Example
/// ```
/// use bourke_delaunay::{quality::triangle_quality, Point2};
///
/// let equilateral = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.5, 0.75f64.sqrt()),
/// ];
/// assert!((triangle_quality(equilateral) - 1.0).abs() < 1.0e-9);
/// ```
pub fn triangle_quality<S: DelaunayNum>(positions: [Point2<S>; 3]) -> f64 {
    let area: f64 = triangle_area(positions).into();
    let perimeter = triangle_perimeter(positions);
    if perimeter == 0.0 {
        return 0.0;
    }
    QUALITY_FACTOR * area / (perimeter * perimeter)
}

/// A face together with its quality.
///
/// Ordered so that a [BinaryHeap] yields the *worst* face first. Faces of equal quality
/// are yielded by increasing face index.
#[derive(Debug, Clone, Copy)]
pub struct FaceQuality {
    /// The face index within its mesh.
    pub face: usize,
    /// The face's quality score.
    pub quality: f64,
}

impl PartialEq for FaceQuality {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FaceQuality {}

impl PartialOrd for FaceQuality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FaceQuality {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .quality
            .total_cmp(&self.quality)
            .then_with(|| other.face.cmp(&self.face))
    }
}

/// Faces ordered from worst to best quality.
///
/// The queue is a snapshot: it does not observe later changes of the mesh. Iterating
/// the queue consumes it in order.
#[derive(Debug, Clone, Default)]
pub struct QualityQueue {
    heap: BinaryHeap<FaceQuality>,
}

impl QualityQueue {
    /// Returns the worst face without removing it.
    pub fn peek(&self) -> Option<FaceQuality> {
        self.heap.peek().copied()
    }

    /// Removes and returns the worst face.
    pub fn pop(&mut self) -> Option<FaceQuality> {
        self.heap.pop()
    }

    /// Adds a face, e.g. after it was modified by an improvement step.
    pub fn push(&mut self, face: FaceQuality) {
        self.heap.push(face);
    }

    /// Returns the number of queued faces.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no face is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl FromIterator<FaceQuality> for QualityQueue {
    fn from_iter<T: IntoIterator<Item = FaceQuality>>(iter: T) -> Self {
        Self {
            heap: iter.into_iter().collect(),
        }
    }
}

impl Iterator for QualityQueue {
    type Item = FaceQuality;

    fn next(&mut self) -> Option<FaceQuality> {
        self.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

/// Summary of the quality scores of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityStatistics {
    /// The number of scored faces.
    pub num_faces: usize,
    /// The lowest score, `None` for meshes without faces.
    pub min: Option<f64>,
    /// The highest score, `None` for meshes without faces.
    pub max: Option<f64>,
    /// The mean score, `None` for meshes without faces.
    pub mean: Option<f64>,
}

/// Decides what happens to the faces handed out by
/// [TriangulationQualityImprover::improve_with].
///
/// Faces are visited in order of increasing quality. Implementations typically apply local
/// repairs such as edge flips to a mesh they own and stop once the quality is acceptable.
pub trait ImprovementPolicy {
    /// Called for each face, worst first. Return [ControlFlow::Break] to stop the pass.
    fn visit_face(&mut self, face: FaceQuality) -> ControlFlow<()>;
}

/// A policy that leaves the mesh untouched and stops at the first face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoImprovement;

impl ImprovementPolicy for NoImprovement {
    fn visit_face(&mut self, _: FaceQuality) -> ControlFlow<()> {
        ControlFlow::Break(())
    }
}

/// A policy collecting all faces below a quality threshold.
///
/// Useful to find the faces that a caller's repair step should look at.
#[derive(Debug, Clone, PartialEq)]
pub struct PoorFaceCollector {
    threshold: f64,
    faces: Vec<FaceQuality>,
}

impl PoorFaceCollector {
    /// Creates a collector for faces with a quality strictly below `threshold`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            faces: Vec::new(),
        }
    }

    /// The collected faces, worst first.
    pub fn faces(&self) -> &[FaceQuality] {
        &self.faces
    }
}

impl ImprovementPolicy for PoorFaceCollector {
    fn visit_face(&mut self, face: FaceQuality) -> ControlFlow<()> {
        if face.quality < self.threshold {
            self.faces.push(face);
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }
}

/// Outcome of an improvement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImprovementReport {
    /// The number of faces handed to the policy.
    pub visited_faces: usize,
    /// The quality of the worst face in the mesh, `None` for meshes without faces.
    pub worst_quality: Option<f64>,
}

/// Scores the faces of a triangular mesh and orders them for improvement.
///
/// # Example
/// ```
/// use bourke_delaunay::{triangulate, Point2, TriangulationQualityImprover};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let triangulation = triangulate(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(2.0, 3.0),
///     Point2::new(2.0, 0.2),
/// ])?;
///
/// let improver = TriangulationQualityImprover::new(&triangulation);
/// let mut queue = improver.quality_queue()?;
/// let worst = queue.pop().unwrap();
/// let next = queue.pop().unwrap();
/// assert!(worst.quality <= next.quality);
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct TriangulationQualityImprover<'a, M: PolygonMesh> {
    mesh: &'a M,
}

impl<M: PolygonMesh> Clone for TriangulationQualityImprover<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: PolygonMesh> Copy for TriangulationQualityImprover<'_, M> {}

impl<'a, M: PolygonMesh> TriangulationQualityImprover<'a, M> {
    /// Creates an improver reading `mesh`.
    pub fn new(mesh: &'a M) -> Self {
        Self { mesh }
    }

    /// The mesh being scored.
    pub fn mesh(&self) -> &'a M {
        self.mesh
    }

    /// Returns the quality of a single face.
    ///
    /// # Errors
    ///
    /// Fails with [QualityError::NonTriangularFace] if the face does not have exactly
    /// three edges and with [QualityError::FaceOutOfRange] for an invalid index.
    pub fn quality(&self, face: usize) -> Result<f64, QualityError> {
        let num_faces = self.mesh.num_faces();
        if face >= num_faces {
            return Err(QualityError::FaceOutOfRange { face, num_faces });
        }

        let edge_count = self.mesh.face_edge_count(face);
        if edge_count != 3 {
            return Err(QualityError::NonTriangularFace { face, edge_count });
        }

        let positions = self.mesh.face_positions(face);
        let [a, b, c] = positions[..] else {
            return Err(QualityError::NonTriangularFace {
                face,
                edge_count: positions.len(),
            });
        };
        Ok(triangle_quality([a, b, c]))
    }

    /// Scores every face. Errors are reported per face and do not stop the iteration.
    pub fn qualities(&self) -> impl Iterator<Item = (usize, Result<f64, QualityError>)> + 'a {
        let improver = *self;
        (0..self.mesh.num_faces()).map(move |face| (face, improver.quality(face)))
    }

    /// Scores every face and orders them from worst to best.
    ///
    /// # Errors
    ///
    /// Fails on the first face that is not a triangle.
    pub fn quality_queue(&self) -> Result<QualityQueue, QualityError> {
        let queue = self
            .qualities()
            .map(|(face, quality)| quality.map(|quality| FaceQuality { face, quality }))
            .collect::<Result<QualityQueue, _>>()?;

        tracing::debug!(
            num_faces = queue.len(),
            worst = ?queue.peek(),
            "built face quality queue"
        );
        Ok(queue)
    }

    /// Returns the minimum, maximum and mean quality over all faces.
    ///
    /// # Errors
    ///
    /// Fails on the first face that is not a triangle.
    pub fn statistics(&self) -> Result<QualityStatistics, QualityError> {
        let mut num_faces = 0;
        let mut min: Option<f64> = None;
        let mut max: Option<f64> = None;
        let mut sum = 0.0;
        for (_, quality) in self.qualities() {
            let quality = quality?;
            num_faces += 1;
            sum += quality;
            min = Some(min.map_or(quality, |min| min.min(quality)));
            max = Some(max.map_or(quality, |max| max.max(quality)));
        }

        Ok(QualityStatistics {
            num_faces,
            min,
            max,
            mean: (num_faces > 0).then(|| sum / num_faces as f64),
        })
    }

    /// Runs the default improvement pass, which leaves the mesh unchanged.
    ///
    /// *See [improve_with](Self::improve_with)*
    pub fn improve(&self) -> Result<ImprovementReport, QualityError> {
        self.improve_with(&mut NoImprovement)
    }

    /// Hands the faces to `policy`, worst first, until the policy stops or all faces have
    /// been visited.
    ///
    /// # Errors
    ///
    /// Fails before visiting any face if the mesh contains a face that is not a triangle.
    pub fn improve_with<P: ImprovementPolicy>(
        &self,
        policy: &mut P,
    ) -> Result<ImprovementReport, QualityError> {
        let mut queue = self.quality_queue()?;
        let worst_quality = queue.peek().map(|face| face.quality);

        let mut visited_faces = 0;
        while let Some(face) = queue.pop() {
            visited_faces += 1;
            if policy.visit_face(face).is_break() {
                break;
            }
        }

        tracing::debug!(visited_faces, "finished quality improvement pass");
        Ok(ImprovementReport {
            visited_faces,
            worst_quality,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{
        triangle_quality, FaceQuality, IndexedMesh, PolygonMesh, PoorFaceCollector,
        QualityError, QualityQueue, TriangulationQualityImprover,
    };
    use crate::test_utilities::{random_points_with_seed, SEED};
    use crate::{triangulate, Point2, TriangulationError};
    use approx::assert_relative_eq;
    use smallvec::{smallvec, SmallVec};

    fn mixed_mesh() -> IndexedMesh<Point2<f64>> {
        let mut mesh = IndexedMesh::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.866),
            Point2::new(100.0, 0.0),
            Point2::new(0.0001, 0.1),
            Point2::new(1.0, 1.0),
        ]);
        mesh.add_face([0, 1, 2]);
        mesh.add_face([0, 3, 4]);
        mesh.add_face([0, 1, 5, 2]);
        mesh.add_face([1, 5, 2]);
        mesh
    }

    #[test]
    fn test_equilateral_quality() {
        let quality = triangle_quality([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.866),
        ]);
        assert_relative_eq!(quality, 1.0, epsilon = 1.0e-3);
    }

    #[test]
    fn test_elongated_quality() {
        let quality = triangle_quality([
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(0.0001, 0.1),
        ]);
        assert!(quality >= 0.0);
        assert!(quality < 0.01);
    }

    #[test]
    fn test_quality_is_scale_and_orientation_invariant() {
        let small = [
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(1.0, 2.0),
        ];
        let large = small.map(|p| Point2::new(p.x * 1000.0 - 5.0, p.y * 1000.0 + 7.0));
        let reversed = [small[2], small[1], small[0]];
        assert_relative_eq!(triangle_quality(small), triangle_quality(large));
        assert_relative_eq!(triangle_quality(small), triangle_quality(reversed));
        assert!(triangle_quality(small) < 1.0);
    }

    #[test]
    fn test_degenerate_quality() {
        let p = Point2::new(2.0, 3.0);
        assert_eq!(triangle_quality([p, p, p]), 0.0);
        assert_eq!(
            triangle_quality([
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(3.0, 3.0)
            ]),
            0.0
        );
    }

    #[test]
    fn test_non_triangular_face() {
        let mesh = mixed_mesh();
        let improver = TriangulationQualityImprover::new(&mesh);
        assert_eq!(
            improver.quality(2),
            Err(QualityError::NonTriangularFace {
                face: 2,
                edge_count: 4
            })
        );
        assert_eq!(
            improver.quality(4),
            Err(QualityError::FaceOutOfRange {
                face: 4,
                num_faces: 4
            })
        );

        // Other faces can still be scored individually
        let scores: Vec<_> = improver.qualities().collect();
        assert_eq!(scores.len(), 4);
        assert!(scores[0].1.is_ok());
        assert!(scores[1].1.is_ok());
        assert!(scores[2].1.is_err());
        assert!(scores[3].1.is_ok());

        assert!(improver.quality_queue().is_err());
        assert!(improver.statistics().is_err());
        assert!(improver.improve().is_err());
    }

    /// Claims triangles but reports only two corners per face.
    struct TruncatedMesh;

    impl PolygonMesh for TruncatedMesh {
        type Scalar = f64;

        fn num_faces(&self) -> usize {
            1
        }

        fn face_edge_count(&self, _: usize) -> usize {
            3
        }

        fn face_positions(&self, _: usize) -> SmallVec<[Point2<f64>; 4]> {
            smallvec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]
        }
    }

    #[test]
    fn test_inconsistent_face_positions() {
        let improver = TriangulationQualityImprover::new(&TruncatedMesh);
        assert_eq!(
            improver.quality(0),
            Err(QualityError::NonTriangularFace {
                face: 0,
                edge_count: 2
            })
        );
        assert!(improver.quality_queue().is_err());
    }

    #[test]
    fn test_queue_order() {
        let mut mesh = mixed_mesh();
        // Replace the quad by a triangle to get a purely triangular mesh
        let triangles: Vec<Vec<usize>> = (0..mesh.num_faces())
            .filter(|&face| mesh.face_edge_count(face) == 3)
            .map(|face| mesh.face(face).to_vec())
            .collect();
        mesh = IndexedMesh::new(mesh.vertices().to_vec());
        for triangle in triangles {
            mesh.add_face(triangle);
        }

        let improver = TriangulationQualityImprover::new(&mesh);
        let order: Vec<usize> = improver
            .quality_queue()
            .unwrap()
            .map(|face| face.face)
            .collect();
        // The needle comes first, the equilateral triangle last
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_equal_quality_order() {
        let queue: QualityQueue = [3, 0, 2, 1]
            .into_iter()
            .map(|face| FaceQuality { face, quality: 0.5 })
            .collect();
        let faces: Vec<_> = queue.map(|face| face.face).collect();
        assert_eq!(faces, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_triangulation_queue() -> Result<(), TriangulationError> {
        let triangulation = triangulate(random_points_with_seed(200, SEED))?;
        let improver = TriangulationQualityImprover::new(&triangulation);
        let queue = improver.quality_queue().unwrap();
        assert_eq!(queue.len(), triangulation.num_triangles());

        let qualities: Vec<f64> = queue.map(|face| face.quality).collect();
        assert!(qualities.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(qualities.iter().all(|&q| (0.0..=1.0 + 1.0e-9).contains(&q)));

        let statistics = improver.statistics().unwrap();
        assert_eq!(statistics.num_faces, triangulation.num_triangles());
        assert_eq!(statistics.min, qualities.first().copied());
        assert_eq!(statistics.max, qualities.last().copied());
        Ok(())
    }

    #[test]
    fn test_indexed_mesh_from_triangulation() -> Result<(), TriangulationError> {
        let triangulation = triangulate(random_points_with_seed(30, SEED))?;
        let mesh = IndexedMesh::from(&triangulation);
        assert_eq!(mesh.num_faces(), triangulation.num_faces());

        let from_mesh = TriangulationQualityImprover::new(&mesh);
        let from_triangulation = TriangulationQualityImprover::new(&triangulation);
        for face in 0..mesh.num_faces() {
            assert_eq!(from_mesh.quality(face), from_triangulation.quality(face));
        }
        Ok(())
    }

    #[test]
    fn test_improve_is_passthrough() -> Result<(), TriangulationError> {
        let triangulation = triangulate(random_points_with_seed(50, SEED))?;
        let before = triangulation.clone();
        let improver = TriangulationQualityImprover::new(&triangulation);

        let report = improver.improve().unwrap();
        assert_eq!(report.visited_faces, 1);
        assert_eq!(report.worst_quality, improver.statistics().unwrap().min);
        assert_eq!(before.triangles(), triangulation.triangles());
        Ok(())
    }

    #[test]
    fn test_poor_face_collector() -> Result<(), TriangulationError> {
        let triangulation = triangulate(random_points_with_seed(100, SEED))?;
        let improver = TriangulationQualityImprover::new(&triangulation);

        let mut collector = PoorFaceCollector::new(0.5);
        let report = improver.improve_with(&mut collector).unwrap();

        let expected = improver
            .qualities()
            .filter(|(_, quality)| *quality.as_ref().unwrap() < 0.5)
            .count();
        assert_eq!(collector.faces().len(), expected);
        assert!(collector.faces().iter().all(|face| face.quality < 0.5));
        // The first face of acceptable quality stops the pass
        let all_poor = expected == triangulation.num_triangles();
        assert_eq!(
            report.visited_faces,
            if all_poor { expected } else { expected + 1 }
        );
        Ok(())
    }

    #[test]
    fn test_empty_mesh() {
        let mesh: IndexedMesh<Point2<f64>> = IndexedMesh::new(Vec::new());
        let improver = TriangulationQualityImprover::new(&mesh);
        assert!(improver.quality_queue().unwrap().is_empty());
        let statistics = improver.statistics().unwrap();
        assert_eq!(statistics.num_faces, 0);
        assert_eq!(statistics.mean, None);
        let report = improver.improve().unwrap();
        assert_eq!(report.visited_faces, 0);
        assert_eq!(report.worst_quality, None);
    }

    #[test]
    #[should_panic]
    fn test_add_face_out_of_bounds() {
        let mut mesh = IndexedMesh::new(vec![Point2::new(0.0, 0.0)]);
        mesh.add_face([0, 1, 2]);
    }
}
