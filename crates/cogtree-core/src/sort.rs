//! Sibling ordering.
//!
//! Siblings are shown significant-first, then by case-sensitive name. The
//! key depends only on the wrapped entry's current flag and name, so sorting
//! the same registry twice always yields the same order.

use std::cmp::Ordering;

use crate::node::Node;

/// The ordering key of a node: `(not significant, name)`.
pub fn sort_key<'a>(node: &Node<'a>) -> (bool, &'a str) {
    (!node.significant(), node.name())
}

/// Compare two nodes by their [`sort_key`].
pub fn compare(a: &Node<'_>, b: &Node<'_>) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Sort nodes into display order. The sort is stable.
pub fn sort_nodes(nodes: &mut [Node<'_>]) {
    nodes.sort_by(compare);
}
