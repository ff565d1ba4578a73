mod circle;
mod rect;

pub use circle::Circle;
pub use rect::Rectangle;

use crate::error::{OperationError, Result};
use crate::math::Vector2;

/// Overlap test between a shape and any [`Shape`].
///
/// The offset translates `self` for the duration of the test; `other` is
/// never moved. All boundaries are inclusive: touching counts as colliding.
pub trait Collide {
    /// Tests `self`, translated by `offset`, against `other`.
    fn collides_with_offset(&self, other: &Shape, offset: &Vector2) -> bool;

    /// Tests `self` against `other` at its stored position.
    fn collides_with(&self, other: &Shape) -> bool {
        self.collides_with_offset(other, &Vector2::zeros())
    }
}

/// A hitbox shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    /// Builds a shape from a kind name and its numeric parameters, as found in
    /// untyped game data.
    ///
    /// - `"rectangle"` / `"rect"`: `[x, y, width, height]`
    /// - `"circle"`: `[x, y, radius]`
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidArgument` if the kind is not a known
    /// shape or the parameter count does not match it.
    pub fn from_parts(kind: &str, params: &[f64]) -> Result<Self> {
        let shape = match (kind, params) {
            ("rectangle" | "rect", &[x, y, w, h]) => Shape::Rectangle(Rectangle::new(x, y, w, h)),
            ("circle", &[x, y, r]) => Shape::Circle(Circle::new(x, y, r)),
            ("rectangle" | "rect" | "circle", _) => {
                tracing::debug!(kind, count = params.len(), "rejected shape parameters");
                return Err(OperationError::InvalidArgument(format!(
                    "{kind} does not take {} parameters",
                    params.len()
                ))
                .into());
            }
            _ => {
                tracing::debug!(kind, "rejected unknown shape kind");
                return Err(
                    OperationError::InvalidArgument(format!("unknown shape kind: {kind}")).into(),
                );
            }
        };
        Ok(shape)
    }

    /// Returns the shape's name as accepted by [`Shape::from_parts`].
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
        }
    }
}

impl Collide for Shape {
    fn collides_with_offset(&self, other: &Shape, offset: &Vector2) -> bool {
        match self {
            Shape::Rectangle(rect) => rect.collides_with_offset(other, offset),
            Shape::Circle(circle) => circle.collides_with_offset(other, offset),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
