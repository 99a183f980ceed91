use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "quadtree region must be finite with positive width/height (x: {x}, y: {y}, width: {width}, height: {height})"
    )]
    InvalidRegion {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    #[error(
        "quadtree config needs node_capacity >= 1 and a finite positive min_size (node_capacity: {node_capacity}, min_size: {min_size})"
    )]
    InvalidConfig { node_capacity: usize, min_size: f32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
