use super::node::Node;

/// A fully parsed document.
///
/// `root` is the first element of the input, not a synthetic container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Node,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Total number of elements, root included
    pub fn element_count(&self) -> usize {
        1 + self.root.descendant_count()
    }
}
