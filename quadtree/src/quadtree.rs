mod config;
mod insert;
mod node;
mod query;

pub use config::Config;

use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;
use node::Node;
use smallvec::SmallVec;

pub(crate) type NodeStack = SmallVec<[usize; 64]>;

pub(crate) const ROOT: usize = 0;

/// A stored value together with the bounds it was inserted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<T> {
    pub value: T,
    pub bounds: Rectangle,
}

/// Region quadtree over a fixed root region.
///
/// Every stored entry lives in exactly one node: the deepest node whose
/// region fully contains it. Entries straddling a split line stay with the
/// parent. Nodes are kept in an arena and recycled by [`QuadTree::clear`],
/// so rebuilding the tree every frame does not reallocate once warm.
pub struct QuadTree<T> {
    nodes: Vec<Node<T>>,
    // Nodes past this index are recycled storage, not part of the tree.
    node_count: usize,
    len: usize,
    // Root region grown to cover entries that poke out of it.
    root_reach: Rectangle,
    config: Config,
}

impl<T: Copy> QuadTree<T> {
    pub fn new(region: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(region, Config::default())
    }

    pub fn new_with_config(region: Rectangle, config: Config) -> QuadtreeResult<Self> {
        validate_region(&region)?;
        config.validate()?;
        Ok(Self {
            nodes: vec![Node::new(region, 0)],
            node_count: 1,
            len: 0,
            root_reach: region,
            config,
        })
    }

    /// Replace the root region. Discards all contents.
    pub fn set_region(&mut self, region: Rectangle) -> QuadtreeResult<()> {
        validate_region(&region)?;
        self.clear();
        self.nodes[ROOT].bounds = region;
        self.root_reach = region;
        Ok(())
    }

    /// Discard every entry and collapse all children. Node storage is kept
    /// for reuse.
    pub fn clear(&mut self) {
        for node in &mut self.nodes[..self.node_count] {
            node.entities.clear();
            node.children = None;
        }
        self.node_count = 1;
        self.len = 0;
        self.root_reach = self.nodes[ROOT].bounds;
    }

    pub fn region(&self) -> Rectangle {
        self.nodes[ROOT].bounds
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        self.for_each_node(|bounds, _, _| bounding_boxes.push(*bounds));
    }

    /// Visit every live node with its region, depth and local entries.
    pub fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(&Rectangle, usize, &[Entry<T>]),
    {
        let mut stack = NodeStack::new();
        stack.push(ROOT);
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            f(&node.bounds, node.depth, &node.entities);
            if let Some(first) = node.children {
                stack.extend(first..first + 4);
            }
        }
    }
}

/// Reject regions that are non-finite or have no area.
pub fn validate_region(region: &Rectangle) -> QuadtreeResult<()> {
    if region.is_degenerate() {
        return Err(QuadtreeError::InvalidRegion {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
        });
    }
    Ok(())
}
