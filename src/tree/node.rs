use super::attribute::AttributeList;
use crate::error::{Result, TreeError};

/// An element in the parsed tree.
///
/// A node owns its children; dropping a node drops its whole subtree. The
/// way back up to a parent is not stored on the node: the parser tracks the
/// chain of open elements itself while building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    tag: Option<String>,
    inner_text: Option<String>,
    children: Vec<Node>,
    attributes: AttributeList,
}

impl Node {
    /// Creates a node with no tag yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Sets the tag name once.
    ///
    /// Setting the same name again is a no-op; a different name is rejected.
    pub fn set_tag(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        match &self.tag {
            Some(current) if *current != name => Err(TreeError::TagAlreadySet {
                current: current.clone(),
                requested: name,
            }
            .into()),
            Some(_) => Ok(()),
            None => {
                self.tag = Some(name);
                Ok(())
            }
        }
    }

    pub fn inner_text(&self) -> Option<&str> {
        self.inner_text.as_deref()
    }

    /// Adds a text fragment, joining with `\n` when text is already present.
    pub fn append_inner_text(&mut self, fragment: &str) {
        match &mut self.inner_text {
            Some(text) => {
                text.push('\n');
                text.push_str(fragment);
            }
            None => self.inner_text = Some(fragment.to_string()),
        }
    }

    /// Appends a fresh untagged child and hands it back for population.
    #[allow(clippy::indexing_slicing)]
    pub fn create_child(&mut self) -> &mut Self {
        let index = self.children.len();
        self.children.push(Self::new());
        &mut self.children[index]
    }

    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// The most recently added child
    pub fn last_child_mut(&mut self) -> Option<&mut Self> {
        self.children.last_mut()
    }

    /// Bounds-checked child access
    pub fn child(&self, index: usize) -> Result<&Self> {
        self.children.get(index).ok_or_else(|| {
            TreeError::IndexOutOfRange {
                index,
                len: self.children.len(),
            }
            .into()
        })
    }

    /// First direct child with the given tag
    pub fn find_child(&self, tag: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.tag() == Some(tag))
    }

    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children
            .iter()
            .filter(move |child| child.tag() == Some(tag))
    }

    /// Number of nodes below this one
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeList {
        &mut self.attributes
    }
}
