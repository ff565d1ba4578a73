use slotmap::SlotMap;

use crate::shape::Shape;

slotmap::new_key_type! {
    /// Unique identifier for a shape in a [`ShapeStore`].
    pub struct ShapeId;
}

/// Arena that owns a set of hitbox shapes.
///
/// Shapes are addressed by generational ids, so a removed id never aliases a
/// shape inserted later.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: SlotMap<ShapeId, Shape>,
}

impl ShapeStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a shape and returns its id.
    pub fn add(&mut self, shape: impl Into<Shape>) -> ShapeId {
        self.shapes.insert(shape.into())
    }

    /// Returns the shape for `id`, if it is still stored.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Returns a mutable reference to the shape for `id`, if it is still stored.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id)
    }

    /// Removes and returns the shape for `id`.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        self.shapes.remove(id)
    }

    /// Returns the number of stored shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns whether the store holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over all stored shapes with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shape::{Circle, Rectangle};

    #[test]
    fn add_and_get() {
        let mut store = ShapeStore::new();
        assert!(store.is_empty());
        let r = store.add(Rectangle::new(0.0, 0.0, 1.0, 1.0));
        let c = store.add(Circle::new(0.0, 0.0, 1.0));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(r).unwrap().kind(), "rectangle");
        assert_eq!(store.get(c).unwrap().kind(), "circle");
    }

    #[test]
    fn removed_id_does_not_resolve() {
        let mut store = ShapeStore::new();
        let id = store.add(Circle::new(0.0, 0.0, 1.0));
        assert!(store.remove(id).is_some());
        assert!(store.get(id).is_none());
        let other = store.add(Circle::new(5.0, 5.0, 1.0));
        assert!(store.get(id).is_none());
        assert!(store.get(other).is_some());
    }

    #[test]
    fn replace_through_get_mut() {
        let mut store = ShapeStore::new();
        let id = store.add(Circle::new(0.0, 0.0, 1.0));
        *store.get_mut(id).unwrap() = Rectangle::new(1.0, 1.0, 2.0, 2.0).into();
        assert_eq!(
            store.get(id),
            Some(&Shape::Rectangle(Rectangle::new(1.0, 1.0, 2.0, 2.0)))
        );
        assert_eq!(store.iter().count(), 1);
    }
}
