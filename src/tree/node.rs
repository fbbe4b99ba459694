//! Arena node representation
//!
//! Nodes live in one Vec owned by the tree; links are indices into it.
//! Every node except the root is referenced by exactly one parent link.

use std::fmt;

/// Position of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena slot.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tree node: a key, its 1-based position among the sorted keys, two links.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<K> {
    /// Stored key.
    pub key: K,

    /// 1-based index of `key` in the sorted key sequence.
    pub rank: usize,

    /// Subtree of keys less than `key`.
    pub left: Option<NodeId>,

    /// Subtree of keys not less than `key`.
    pub right: Option<NodeId>,
}

impl<K> Node<K> {
    /// Detached node.
    pub fn leaf(key: K, rank: usize) -> Self {
        Self {
            key,
            rank,
            left: None,
            right: None,
        }
    }

    /// No children on either side.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_node_is_leaf() {
        let mut node = Node::leaf("k", 1);
        assert!(node.is_leaf());

        node.right = Some(NodeId(3));
        assert!(!node.is_leaf());
        assert_eq!(node.right.map(NodeId::index), Some(3));
        assert_eq!(NodeId(3).to_string(), "#3");
    }
}
