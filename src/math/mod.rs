pub mod distance_2d;
pub mod intersect_2d;
pub mod scalar;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Slack allowed when checking that a computed intersection lies on a segment.
pub const TOLERANCE: f64 = 1e-10;
