//! Optional outline rendering of hitboxes.
//!
//! The crate does not draw anything itself; callers plug in their renderer
//! through [`DebugDraw`].

use crate::math::Vector2;
use crate::shape::Shape;

/// Drawing primitive able to outline axis-aligned rectangles and circles.
pub trait DebugDraw {
    /// Outlines a rectangle with top-left corner `(x, y)`.
    fn outline_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Outlines a circle centered at `(x, y)`.
    fn outline_circle(&mut self, x: f64, y: f64, radius: f64);
}

impl Shape {
    /// Outlines the shape, translated by `offset`, on `target`.
    pub fn draw(&self, target: &mut impl DebugDraw, offset: &Vector2) {
        match self {
            Shape::Rectangle(r) => {
                target.outline_rectangle(r.x() + offset.x, r.y() + offset.y, r.width(), r.height());
            }
            Shape::Circle(c) => target.outline_circle(c.x() + offset.x, c.y() + offset.y, c.radius()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Circle, Rectangle};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl DebugDraw for Recorder {
        fn outline_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.calls.push(format!("rect {x} {y} {width} {height}"));
        }

        fn outline_circle(&mut self, x: f64, y: f64, radius: f64) {
            self.calls.push(format!("circle {x} {y} {radius}"));
        }
    }

    #[test]
    fn draws_each_variant_with_offset() {
        let mut rec = Recorder::default();
        let offset = Vector2::new(1.0, 2.0);
        Shape::from(Rectangle::new(0.0, 0.0, 3.0, 4.0)).draw(&mut rec, &offset);
        Shape::from(Circle::new(5.0, 5.0, 2.0)).draw(&mut rec, &Vector2::zeros());
        assert_eq!(rec.calls, vec!["rect 1 2 3 4", "circle 5 5 2"]);
    }
}
