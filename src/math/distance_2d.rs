use super::{Point2, Vector2};

/// Returns the point of the axis-aligned box closest to `p`.
///
/// The box spans `origin` to `origin + extent`. Each axis is clamped as
/// `max(min_edge, min(p, max_edge))`, so a point inside the box maps to
/// itself and an inverted (negative) extent collapses onto `origin`.
#[must_use]
pub fn closest_point_on_box(origin: &Point2, extent: &Vector2, p: &Point2) -> Point2 {
    Point2::new(
        origin.x.max(p.x.min(origin.x + extent.x)),
        origin.y.max(p.y.min(origin.y + extent.y)),
    )
}

/// Returns the distance from `p` to the nearest point of the axis-aligned box.
///
/// Zero when `p` lies inside or on the boundary of the box.
#[must_use]
pub fn point_to_box_dist(origin: &Point2, extent: &Vector2, p: &Point2) -> f64 {
    let closest = closest_point_on_box(origin, extent, p);
    ((p.x - closest.x).powi(2) + (p.y - closest.y).powi(2)).sqrt()
}
