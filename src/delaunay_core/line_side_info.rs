/// Describes on which side of a directed line a point lies.
///
/// Created by [side_query](crate::math::side_query). A point on the left side of the
/// line `a -> b` means that the triangle `(a, b, point)` is ordered counter clockwise.
#[derive(Debug, Clone, Copy)]
pub struct LineSideInfo {
    signed_side: f64,
}

impl PartialEq for LineSideInfo {
    fn eq(&self, other: &LineSideInfo) -> bool {
        if self.is_on_line() || other.is_on_line() {
            self.is_on_line() && other.is_on_line()
        } else {
            self.is_on_left_side() == other.is_on_left_side()
        }
    }
}

impl LineSideInfo {
    #[inline]
    pub(crate) fn from_determinant(s: f64) -> LineSideInfo {
        LineSideInfo { signed_side: s }
    }

    /// Returns `true` if the point lies strictly left of the line (counter clockwise turn).
    pub fn is_on_left_side(&self) -> bool {
        self.signed_side > 0.0
    }

    /// Returns `true` if the point lies strictly right of the line (clockwise turn).
    pub fn is_on_right_side(&self) -> bool {
        self.signed_side < 0.0
    }

    /// Returns `true` if the point lies left of the line or on the line itself.
    pub fn is_on_left_side_or_on_line(&self) -> bool {
        self.signed_side >= 0.0
    }

    /// Returns `true` if the three points spanning this query are collinear.
    #[inline]
    pub fn is_on_line(self) -> bool {
        self.signed_side == 0.0
    }

    /// The sign of the underlying orientation determinant: `1`, `-1` or `0`.
    pub(crate) fn signum(self) -> f64 {
        if self.is_on_line() {
            0.0
        } else {
            self.signed_side.signum()
        }
    }

    /// Returns the query result for the reversed line.
    pub fn reversed(self) -> LineSideInfo {
        LineSideInfo {
            signed_side: -self.signed_side,
        }
    }
}
