use super::Entry;
use common::shapes::Rectangle;

pub(crate) struct Node<T> {
    pub(crate) bounds: Rectangle,
    pub(crate) depth: usize,
    // Index of the first of four contiguous children.
    pub(crate) children: Option<usize>,
    pub(crate) entities: Vec<Entry<T>>,
}

impl<T> Node<T> {
    pub(crate) fn new(bounds: Rectangle, depth: usize) -> Self {
        Self {
            bounds,
            depth,
            children: None,
            entities: Vec::new(),
        }
    }

    pub(crate) fn reset(&mut self, bounds: Rectangle, depth: usize) {
        self.bounds = bounds;
        self.depth = depth;
        self.children = None;
        self.entities.clear();
    }
}
