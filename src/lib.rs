pub mod debug;
pub mod error;
pub mod math;
pub mod query;
pub mod shape;
pub mod store;

pub use error::{HitboxError, Result};
pub use query::CollisionQuery;
pub use shape::{Circle, Collide, Rectangle, Shape};
pub use store::{ShapeId, ShapeStore};
