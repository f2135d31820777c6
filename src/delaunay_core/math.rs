use crate::{DelaunayNum, HasPosition, LineSideInfo, Point2};
use num_traits::Float;
use thiserror::Error;

/// The error type used when a vertex position cannot be handled by the exact predicates.
///
/// Vertices can be checked for validity by using [validate_vertex].
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash, Error)]
pub enum InsertionError {
    /// A coordinate value was too small.
    ///
    /// The absolute value of any inserted vertex coordinate must either be zero or
    /// greater than or equal to [MIN_ALLOWED_VALUE].
    #[error("coordinate is too small")]
    TooSmall,

    /// A coordinate value was too large.
    ///
    /// The absolute value of any inserted vertex coordinate must be less than or equal to
    /// [MAX_ALLOWED_VALUE].
    #[error("coordinate is too large")]
    TooLarge,

    /// A coordinate value was NaN.
    #[error("coordinate is NaN")]
    NAN,
}

/// The smallest allowed coordinate value greater than zero. This value is equal to 2<sup>-142</sup>.
///
/// Smaller non-zero magnitudes can underflow the exponent inside the adaptive
/// `orient2d` and `incircle` predicates.
///
/// *See also [validate_coordinate], [mitigate_underflow]*
pub const MIN_ALLOWED_VALUE: f64 = 1.793662034335766e-43; // 1.0 * 2^-142

/// The largest allowed coordinate value. This value is equal to 2<sup>201</sup>.
///
/// Inside this bound the exact predicates of [side_query] and circumcircle containment
/// cannot overflow.
pub const MAX_ALLOWED_VALUE: f64 = 3.2138760885179806e60; // 1.0 * 2^201

/// Checks if a coordinate value is suitable for the exact predicates.
///
/// Will return an error if and only if
///  - The absolute value of the coordinate is too small (See [MIN_ALLOWED_VALUE])
///  - The absolute value of the coordinate is too large (See [MAX_ALLOWED_VALUE])
///  - The coordinate is NaN (not a number)
///
/// Infinite values result in `Err(InsertionError::TooLarge)`.
pub fn validate_coordinate<S: DelaunayNum>(value: S) -> Result<(), InsertionError> {
    let as_f64: f64 = value.into();
    if as_f64.is_nan() {
        Err(InsertionError::NAN)
    } else if as_f64.abs() < MIN_ALLOWED_VALUE && as_f64 != 0.0 {
        Err(InsertionError::TooSmall)
    } else if as_f64.abs() > MAX_ALLOWED_VALUE {
        Err(InsertionError::TooLarge)
    } else {
        Ok(())
    }
}

/// Checks if both coordinates of a vertex are valid. See [validate_coordinate].
pub fn validate_vertex<V: HasPosition>(vertex: &V) -> Result<(), InsertionError> {
    let position = vertex.position();
    validate_coordinate(position.x)?;
    validate_coordinate(position.y)?;
    Ok(())
}

/// Sets any coordinate whose magnitude is below [MIN_ALLOWED_VALUE] to zero.
///
/// Rounds towards zero, even if rounding to ±[MIN_ALLOWED_VALUE] would be closer.
///
/// # Example
/// ```
/// use bourke_delaunay::{math, Point2};
///
/// let position = Point2::new(1.0e-44, 42.0);
/// assert!(math::validate_vertex(&position).is_err());
///
/// let mitigated = math::mitigate_underflow(position);
/// assert!(math::validate_vertex(&mitigated).is_ok());
/// assert_eq!(mitigated, Point2::new(0.0, 42.0));
/// ```
pub fn mitigate_underflow(position: Point2<f64>) -> Point2<f64> {
    Point2::new(
        mitigate_underflow_for_coordinate(position.x),
        mitigate_underflow_for_coordinate(position.y),
    )
}

fn mitigate_underflow_for_coordinate<S: DelaunayNum>(coordinate: S) -> S {
    if coordinate != S::zero() && coordinate.abs().into() < MIN_ALLOWED_VALUE {
        S::zero()
    } else {
        coordinate
    }
}

fn to_robust_coord<S: DelaunayNum>(point: Point2<S>) -> robust::Coord<S> {
    robust::Coord {
        x: point.x,
        y: point.y,
    }
}

/// Returns `true` if `p` lies strictly inside the circumcircle of `v1`, `v2` and `v3`.
///
/// The corners may be given in either orientation. Points exactly on the circle are not
/// contained. Collinear corners have no circumcircle and never contain any point.
pub fn contained_in_circumference<S>(
    v1: Point2<S>,
    v2: Point2<S>,
    v3: Point2<S>,
    p: Point2<S>,
) -> bool
where
    S: DelaunayNum,
{
    let orientation = side_query(v1, v2, v3).signum();
    if orientation == 0.0 {
        return false;
    }

    let v1 = to_robust_coord(v1);
    let v2 = to_robust_coord(v2);
    let v3 = to_robust_coord(v3);
    let p = to_robust_coord(p);

    // incircle is positive for points inside the circle of a ccw ordered triangle
    robust::incircle(v1, v2, v3, p) * orientation > 0.0
}

/// Returns `true` if `p1`, `p2` and `query_point` are ordered counter clockwise or collinear.
pub fn is_ordered_ccw<S>(p1: Point2<S>, p2: Point2<S>, query_point: Point2<S>) -> bool
where
    S: DelaunayNum,
{
    let query = side_query(p1, p2, query_point);
    query.is_on_left_side_or_on_line()
}

/// Exact orientation of `query_point` relative to the directed line `p1 -> p2`.
pub fn side_query<S>(p1: Point2<S>, p2: Point2<S>, query_point: Point2<S>) -> LineSideInfo
where
    S: DelaunayNum,
{
    let p1 = to_robust_coord(p1);
    let p2 = to_robust_coord(p2);
    let query_point = to_robust_coord(query_point);

    let result = robust::orient2d(p1, p2, query_point);
    LineSideInfo::from_determinant(result)
}

/// Returns the circumcenter and the squared circumradius of a triangle.
///
/// The result is not finite for collinear corners.
pub fn circumcenter<S>(positions: [Point2<S>; 3]) -> (Point2<S>, S)
where
    S: DelaunayNum + Float,
{
    let [v0, v1, v2] = positions;
    let b = v1.sub(v0);
    let c = v2.sub(v0);

    let one = S::one();
    let two = one + one;
    let d = two * (b.x * c.y - c.x * b.y);
    let len_b = b.dot(b);
    let len_c = c.dot(c);
    let d_inv: S = one / d;

    let x = (len_b * c.y - len_c * b.y) * d_inv;
    let y = (-len_b * c.x + len_c * b.x) * d_inv;
    let result = Point2::new(x, y);
    (result.add(v0), x * x + y * y)
}

/// Unsigned area of a triangle.
pub fn triangle_area<S>(positions: [Point2<S>; 3]) -> S
where
    S: DelaunayNum,
{
    let [v0, v1, v2] = positions;
    let b = v1.sub(v0);
    let c = v2.sub(v0);
    (b.x * c.y - b.y * c.x).abs() * 0.5.into()
}

/// Sum of the three edge lengths of a triangle, evaluated in `f64`.
pub fn triangle_perimeter<S>(positions: [Point2<S>; 3]) -> f64
where
    S: DelaunayNum,
{
    let [v0, v1, v2] = positions;
    v0.distance(v1) + v1.distance(v2) + v2.distance(v0)
}
