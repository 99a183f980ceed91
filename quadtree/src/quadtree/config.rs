use crate::error::{QuadtreeError, QuadtreeResult};

#[derive(Debug, Clone)]
pub struct Config {
    /// Local entries a leaf holds before it splits.
    pub node_capacity: usize,
    pub max_depth: usize,
    /// Nodes narrower than this are never split further.
    pub min_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 8,
            max_depth: 8,
            min_size: 1.0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.node_capacity == 0 || !(self.min_size > 0.0 && self.min_size.is_finite()) {
            return Err(QuadtreeError::InvalidConfig {
                node_capacity: self.node_capacity,
                min_size: self.min_size,
            });
        }
        Ok(())
    }
}
