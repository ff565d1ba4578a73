use super::scalar::sign;
use super::{Point2, TOLERANCE};
use crate::error::GeometryError;

/// Coefficients of the implicit line `a·x + b·y = c` through two points.
fn implicit_line(p: &Point2, q: &Point2) -> (f64, f64, f64) {
    let a = q.y - p.y;
    let b = p.x - q.x;
    (a, b, a * p.x + b * p.y)
}

/// Whether `pt` lies inside the bounding box of the segment `p`→`q`,
/// inclusive within [`TOLERANCE`].
fn within_segment_bounds(pt: &Point2, p: &Point2, q: &Point2) -> bool {
    let eps = TOLERANCE;
    p.x.min(q.x) - eps <= pt.x
        && pt.x <= p.x.max(q.x) + eps
        && p.y.min(q.y) - eps <= pt.y
        && pt.y <= p.y.max(q.y) + eps
}

/// An endpoint of either segment lying exactly on the other line.
///
/// For non-parallel lines that endpoint is the intersection, and returning
/// it verbatim keeps Cramer's rounding from pushing it off the segment.
#[allow(clippy::float_cmp)]
fn endpoint_on_other_line(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Option<Point2> {
    [a0, a1]
        .into_iter()
        .find(|p| check_direction(b0, b1, p) == 0.0)
        .or_else(|| [b0, b1].into_iter().find(|p| check_direction(a0, a1, p) == 0.0))
        .copied()
}

/// Intersection of line `a0`→`a1` with line `b0`→`b1`.
///
/// Both lines are infinite unless `clip_a` / `clip_b` restrict them to their
/// segments. A point on a segment endpoint counts as inside: an endpoint
/// lying exactly on the other line is returned as-is, and the segment bounds
/// are widened by [`TOLERANCE`].
///
/// # Errors
///
/// - `GeometryError::Parallel` if the lines are parallel or coincident
///   (zero determinant).
/// - `GeometryError::DisjointSegments` if the lines cross outside a
///   requested segment.
#[allow(clippy::float_cmp)]
pub fn find_intersect(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    clip_a: bool,
    clip_b: bool,
) -> Result<Point2, GeometryError> {
    let (a_a, b_a, c_a) = implicit_line(a0, a1);
    let (a_b, b_b, c_b) = implicit_line(b0, b1);

    let det = a_a * b_b - a_b * b_a;
    if det == 0.0 {
        return Err(GeometryError::Parallel);
    }

    let pt = endpoint_on_other_line(a0, a1, b0, b1).unwrap_or_else(|| {
        Point2::new(
            (b_b * c_a - b_a * c_b) / det,
            (a_a * c_b - a_b * c_a) / det,
        )
    });

    if clip_a && !within_segment_bounds(&pt, a0, a1) {
        return Err(GeometryError::DisjointSegments);
    }
    if clip_b && !within_segment_bounds(&pt, b0, b1) {
        return Err(GeometryError::DisjointSegments);
    }
    Ok(pt)
}

/// Cross product of `p1`→`p2` with `p1`→`p3`.
///
/// Positive when `p3` is counter-clockwise of the directed line `p1`→`p2`
/// (in a y-up frame), negative when clockwise, zero when collinear.
#[must_use]
pub fn check_direction(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    (p2.x - p1.x) * (p3.y - p1.y) - (p3.x - p1.x) * (p2.y - p1.y)
}

/// Orientation test for segments `a0`→`a1` and `b0`→`b1`.
///
/// True when the endpoints of each segment lie on opposite sides of the
/// other segment's line, or one endpoint lies on it. Fully collinear
/// segments report `false`, matching [`find_intersect`]'s `Parallel`.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn check_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let d1 = sign(check_direction(b0, b1, a0));
    let d2 = sign(check_direction(b0, b1, a1));
    let d3 = sign(check_direction(a0, a1, b0));
    let d4 = sign(check_direction(a0, a1, b1));
    d1 != d2 && d3 != d4
}
