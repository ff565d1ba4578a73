use crate::error::{OperationError, Result};
use crate::math::Vector2;
use crate::shape::{Collide, Shape};
use crate::store::{ShapeId, ShapeStore};

/// Tests whether a stored shape collides with another stored shape.
pub struct CollisionQuery {
    subject: ShapeId,
    target: ShapeId,
    offset: Vector2,
}

impl CollisionQuery {
    /// Creates a new `CollisionQuery` with zero offset.
    #[must_use]
    pub fn new(subject: ShapeId, target: ShapeId) -> Self {
        Self {
            subject,
            target,
            offset: Vector2::zeros(),
        }
    }

    /// Sets the translation applied to the subject for this query.
    #[must_use]
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidArgument` if either id does not
    /// resolve to a shape in `store`.
    pub fn execute(&self, store: &ShapeStore) -> Result<bool> {
        let subject = resolve(store, self.subject, "subject")?;
        let target = resolve(store, self.target, "target")?;
        let hit = subject.collides_with_offset(target, &self.offset);
        tracing::trace!(
            subject = subject.kind(),
            target = target.kind(),
            dx = self.offset.x,
            dy = self.offset.y,
            hit,
            "collision query"
        );
        Ok(hit)
    }

    /// Returns every other stored shape that `subject`, translated by
    /// `offset`, collides with.
    ///
    /// This is a linear scan over the store.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidArgument` if `subject` does not
    /// resolve to a shape in `store`.
    pub fn colliding_with(
        subject: ShapeId,
        offset: &Vector2,
        store: &ShapeStore,
    ) -> Result<Vec<ShapeId>> {
        let shape = resolve(store, subject, "subject")?;
        let hits: Vec<ShapeId> = store
            .iter()
            .filter(|&(id, other)| id != subject && shape.collides_with_offset(other, offset))
            .map(|(id, _)| id)
            .collect();
        tracing::trace!(subject = shape.kind(), hits = hits.len(), "collision scan");
        Ok(hits)
    }
}

fn resolve<'a>(store: &'a ShapeStore, id: ShapeId, role: &str) -> Result<&'a Shape> {
    store.get(id).ok_or_else(|| {
        tracing::debug!(?id, role, "shape id does not resolve");
        OperationError::InvalidArgument(format!("{role} is not a stored shape")).into()
    })
}
