use super::*;

impl<T: Copy> QuadTree<T> {
    /// Append every value whose bounds may intersect `area`.
    ///
    /// The result is a superset of the true overlap set: nodes fully covered
    /// by `area` are reported wholesale without per-entry tests.
    pub fn query(&self, area: &Rectangle, out: &mut Vec<T>) {
        self.query_with(area, |value| out.push(value));
    }

    pub fn query_with<F>(&self, area: &Rectangle, mut f: F)
    where
        F: FnMut(T),
    {
        let mut stack = NodeStack::new();
        stack.push(ROOT);
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if area.contains_rectangle(&node.bounds) {
                self.visit_subtree(index, &mut f);
                continue;
            }

            let reach = if index == ROOT {
                &self.root_reach
            } else {
                &node.bounds
            };
            if !area.intersects(reach) {
                continue;
            }

            for entry in &node.entities {
                if area.intersects(&entry.bounds) {
                    f(entry.value);
                }
            }
            if let Some(first) = node.children {
                stack.extend(first..first + 4);
            }
        }
    }

    /// Every value in the tree, in node order.
    pub fn all_values(&self, out: &mut Vec<T>) {
        self.visit_subtree(ROOT, &mut |value| out.push(value));
    }

    fn visit_subtree<F>(&self, index: usize, f: &mut F)
    where
        F: FnMut(T),
    {
        let mut stack = NodeStack::new();
        stack.push(index);
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            for entry in &node.entities {
                f(entry.value);
            }
            if let Some(first) = node.children {
                stack.extend(first..first + 4);
            }
        }
    }
}
