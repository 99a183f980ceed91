use crate::types::CollisionType;
use quadtree::QuadtreeError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CollisionError {
    #[error("collision type {collision_type} is outside the configured range 1..{max}")]
    TypeOutOfRange {
        collision_type: CollisionType,
        max: usize,
    },
    #[error(transparent)]
    Quadtree(#[from] QuadtreeError),
}

pub type CollisionResult<T> = Result<T, CollisionError>;
