use crate::math::distance_2d::point_to_box_dist;
use crate::math::{Point2, Vector2};

use super::{Circle, Collide, Shape};

/// An axis-aligned rectangle given by its top-left corner and extents.
///
/// Extents are stored verbatim. A zero width or height behaves as a segment
/// (or a point) in collision tests; negative extents are the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    origin: Point2,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a new rectangle.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point2::new(x, y),
            width,
            height,
        }
    }

    /// Returns the top-left corner.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the x coordinate of the left edge.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    /// Returns the y coordinate of the top edge.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    /// Returns the width of the rectangle.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height of the rectangle.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns `(width, height)` as a vector.
    #[must_use]
    pub fn extent(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    /// Inclusive AABB overlap with `other`, with `offset` applied to `self`.
    pub(crate) fn overlaps_rectangle(&self, other: &Rectangle, offset: &Vector2) -> bool {
        let left = self.x() + offset.x;
        let top = self.y() + offset.y;
        left <= other.x() + other.width
            && top <= other.y() + other.height
            && left + self.width >= other.x()
            && top + self.height >= other.y()
    }

    /// Closest-point test against `circle`, with `offset` applied to `self`.
    pub(crate) fn overlaps_circle(&self, circle: &Circle, offset: &Vector2) -> bool {
        let origin = self.origin + *offset;
        point_to_box_dist(&origin, &self.extent(), circle.center()) <= circle.radius()
    }
}

impl Collide for Rectangle {
    fn collides_with_offset(&self, other: &Shape, offset: &Vector2) -> bool {
        match other {
            Shape::Rectangle(rect) => self.overlaps_rectangle(rect, offset),
            Shape::Circle(circle) => self.overlaps_circle(circle, offset),
        }
    }
}
