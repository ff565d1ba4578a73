use crate::math::distance_2d::point_to_box_dist;
use crate::math::vector_2d::distance_2d;
use crate::math::{Point2, Vector2};

use super::{Collide, Rectangle, Shape};

/// A circle given by its center and radius.
///
/// A negative radius is stored as-is and never collides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point2::new(x, y),
            radius,
        }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the x coordinate of the center.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.center.x
    }

    /// Returns the y coordinate of the center.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Closest-point test against `rect`, with `offset` applied to `self`.
    ///
    /// Same closest-point-on-box formula as the rectangle side, so both
    /// directions agree.
    pub(crate) fn overlaps_rectangle(&self, rect: &Rectangle, offset: &Vector2) -> bool {
        let center = self.center + *offset;
        point_to_box_dist(rect.origin(), &rect.extent(), &center) <= self.radius
    }

    pub(crate) fn overlaps_circle(&self, other: &Circle, offset: &Vector2) -> bool {
        let center = self.center + *offset;
        distance_2d(&center, &other.center) <= self.radius + other.radius
    }
}

impl Collide for Circle {
    fn collides_with_offset(&self, other: &Shape, offset: &Vector2) -> bool {
        match other {
            Shape::Rectangle(rect) => self.overlaps_rectangle(rect, offset),
            Shape::Circle(circle) => self.overlaps_circle(circle, offset),
        }
    }
}
