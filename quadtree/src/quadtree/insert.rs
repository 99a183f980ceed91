use super::*;
use common::shapes::Shape;

impl<T: Copy> QuadTree<T> {
    /// Insert `value` with the bounding box of `shape`.
    ///
    /// Returns `false` when the shape is degenerate or does not touch the
    /// root region; such values are not stored.
    pub fn insert<S: Shape>(&mut self, value: T, shape: &S) -> bool {
        let bounds = shape.bounding_box();
        if bounds.is_degenerate() || !self.nodes[ROOT].bounds.intersects(&bounds) {
            return false;
        }

        let entry = Entry { value, bounds };
        let mut index = ROOT;
        loop {
            let node = &self.nodes[index];
            if node.children.is_none() {
                if node.entities.len() < self.config.node_capacity || !self.can_subdivide(index) {
                    self.add(index, entry);
                    return true;
                }
                self.subdivide(index);
            }

            match self.child_containing(index, &bounds) {
                Some(child) => index = child,
                None => {
                    self.add(index, entry);
                    return true;
                }
            }
        }
    }

    fn add(&mut self, index: usize, entry: Entry<T>) {
        if index == ROOT {
            self.root_reach.expand_to_include(&entry.bounds);
        }
        self.nodes[index].entities.push(entry);
        self.len += 1;
    }

    fn can_subdivide(&self, index: usize) -> bool {
        let node = &self.nodes[index];
        node.depth < self.config.max_depth
            && node.bounds.width / 2.0 >= self.config.min_size
            && node.bounds.height / 2.0 >= self.config.min_size
    }

    fn child_containing(&self, index: usize, bounds: &Rectangle) -> Option<usize> {
        let first = self.nodes[index].children?;
        (first..first + 4).find(|&child| self.nodes[child].bounds.contains_rectangle(bounds))
    }

    /// Split a leaf into four quadrants and push down every local entry that
    /// fits entirely inside one of them.
    fn subdivide(&mut self, index: usize) {
        let parent_bounds = self.nodes[index].bounds;
        let depth = self.nodes[index].depth + 1;
        let first = self.node_count;
        for quadrant in 0..4 {
            let bounds = parent_bounds.quadrant(quadrant);
            match self.nodes.get_mut(first + quadrant) {
                Some(recycled) => recycled.reset(bounds, depth),
                None => self.nodes.push(Node::new(bounds, depth)),
            }
        }
        self.node_count += 4;
        self.nodes[index].children = Some(first);

        let mut entities = std::mem::take(&mut self.nodes[index].entities);
        let nodes = &mut self.nodes;
        entities.retain(|entry| {
            let target = (first..first + 4)
                .find(|&child| nodes[child].bounds.contains_rectangle(&entry.bounds));
            match target {
                Some(child) => {
                    nodes[child].entities.push(*entry);
                    false
                }
                None => true,
            }
        });
        self.nodes[index].entities = entities;
    }
}
