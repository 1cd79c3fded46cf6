use crate::tree::{Document, Node};

/// Structural comparison of two subtrees: tags, text, attributes in order, children in order
pub fn compare_nodes(left: &Node, right: &Node) -> bool {
    left.tag() == right.tag()
        && left.inner_text() == right.inner_text()
        && left.attributes() == right.attributes()
        && left.children().len() == right.children().len()
        && left
            .children()
            .iter()
            .zip(right.children())
            .all(|(l, r)| compare_nodes(l, r))
}

/// Asserts that two documents have the same tree
///
/// # Panics
///
/// Panics if the documents differ
pub fn assert_documents_equal(left: &Document, right: &Document, message: &str) {
    assert!(
        compare_nodes(&left.root, &right.root),
        "{}\nLeft: {:?}\nRight: {:?}",
        message,
        left,
        right
    );
}
