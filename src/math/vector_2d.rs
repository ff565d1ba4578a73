use super::{Point2, Point3, Vector2};
use crate::error::GeometryError;

/// Returns the angle, in radians, of the direction from `from` to `to`.
#[must_use]
pub fn angle_between(from: &Point2, to: &Point2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Circular mean of a set of angles, in radians.
///
/// Averaging on the unit circle keeps `-170°` and `170°` from averaging to
/// zero.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if `angles` is empty.
pub fn average_angle(angles: &[f64]) -> Result<f64, GeometryError> {
    if angles.is_empty() {
        return Err(GeometryError::Degenerate(
            "cannot average an empty set of angles".into(),
        ));
    }
    let (sin, cos) = angles
        .iter()
        .fold((0.0, 0.0), |(s, c), a| (s + a.sin(), c + a.cos()));
    Ok(sin.atan2(cos))
}

/// Euclidean distance between two 2D points.
#[must_use]
pub fn distance_2d(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Euclidean distance between two 3D points.
#[must_use]
pub fn distance_3d(a: &Point3, b: &Point3) -> f64 {
    nalgebra::distance(a, b)
}

/// Normalizes `v`, returning the unit vector together with the original length.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` has zero length.
#[allow(clippy::float_cmp)]
pub fn normalize(v: &Vector2) -> Result<(Vector2, f64), GeometryError> {
    let len = v.norm();
    if len == 0.0 {
        return Err(GeometryError::ZeroVector);
    }
    Ok((v / len, len))
}
