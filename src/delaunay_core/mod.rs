mod indexed_edge;
mod indexed_triangle;
mod line_side_info;

pub mod math;

pub use indexed_edge::IndexedEdge;
pub use indexed_triangle::IndexedTriangle;
pub use line_side_info::LineSideInfo;
