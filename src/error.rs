use thiserror::Error;

/// Top-level error type for the hitbox crate.
#[derive(Debug, Error)]
pub enum HitboxError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
///
/// `Parallel` and `DisjointSegments` are the two ways a line intersection
/// can fail; callers are expected to branch on them rather than bail out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("parallel")]
    Parallel,

    #[error("segments don't intersect")]
    DisjointSegments,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to shape queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for results using [`HitboxError`].
pub type Result<T> = std::result::Result<T, HitboxError>;
