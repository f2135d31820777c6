//! # Bourke Delaunay
//! Incremental Delaunay triangulation of planar point sets and triangle quality scoring.
//!
//! Points are inserted one at a time into an enclosing "super triangle" whose corners lie
//! at infinity. Every triangle whose circumcircle contains the new point is removed and
//! the resulting cavity is re-triangulated around the point. Finally all triangles
//! touching the super triangle are discarded.
//!
//! # Features
//! * A 2D Delaunay triangulation: [triangulate] and [DelaunayTriangulator]
//!   * Uses exact geometric predicates, see [math]
//!   * Supports `f32` and `f64` coordinates
//!   * Configurable handling of duplicate input points, see [DuplicatePolicy]
//! * Shape quality scores for triangular meshes: [TriangulationQualityImprover]
//! * Serialization of triangulations with `serde` (feature `serde`)
//!
//! # Example
//! ```
//! use bourke_delaunay::{triangulate, Point2, TriangulationQualityImprover};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let triangulation = triangulate(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ])?;
//!
//! assert_eq!(triangulation.num_triangles(), 2);
//! assert!(triangulation.is_delaunay());
//!
//! let improver = TriangulationQualityImprover::new(&triangulation);
//! let worst = improver.quality_queue()?.pop().unwrap();
//! assert!(worst.quality > 0.5);
//! # Ok(()) }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod delaunay_core;
mod delaunay_triangulator;
mod point;
mod triangulation;

pub mod quality;

#[cfg(test)]
mod test_utilities;

pub use crate::delaunay_core::math;
pub use crate::delaunay_core::math::InsertionError;
pub use crate::delaunay_core::{IndexedEdge, IndexedTriangle, LineSideInfo};

pub use delaunay_triangulator::{
    triangulate, DelaunayTriangulator, DuplicatePolicy, TriangulationError,
    TriangulatorParameters,
};
pub use point::{DelaunayNum, HasPosition, Point2};
pub use quality::{
    triangle_quality, FaceQuality, ImprovementPolicy, ImprovementReport, IndexedMesh,
    NoImprovement, PolygonMesh, PoorFaceCollector, QualityError, QualityQueue,
    QualityStatistics, TriangulationQualityImprover,
};
pub use triangulation::Triangulation;
