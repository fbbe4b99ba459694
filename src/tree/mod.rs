//! Materialized search tree
//!
//! Arena-backed binary tree built once from the split table and then
//! only queried. Convention used everywhere (insert, search, depth):
//!   key <  node.key  → left
//!   key >= node.key  → right

mod materialize;
mod node;
mod query;
mod reconstruct;

pub use materialize::ShapePolicy;
pub(crate) use materialize::materialize;
pub use node::{Node, NodeId};
pub use query::QueryError;
pub use reconstruct::split_sequence;

use crate::weights::Weights;

/// Binary search tree whose nodes are owned by a single arena.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree<K> {
    nodes: Vec<Node<K>>,
    root: Option<NodeId>,
}

impl<K> Default for SearchTree<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<K> SearchTree<K> {
    /// Empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn push(&mut self, node: Node<K>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.0]
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no key was materialized.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root slot, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Key stored at the root.
    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|id| &self.node(id).key)
    }

    /// Node in slot `id`.
    pub fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.0]
    }

    /// Number of levels: 0 for an empty tree, 1 for a lone root.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, level)) = pending.pop() {
            height = height.max(level);
            let node = self.node(id);
            pending.extend(node.left.map(|c| (c, level + 1)));
            pending.extend(node.right.map(|c| (c, level + 1)));
        }
        height
    }

    /// Keys root-first, left subtree before right.
    pub fn preorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut pending: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = pending.pop() {
            let node = self.node(id);
            keys.push(&node.key);
            pending.extend(node.right);
            pending.extend(node.left);
        }
        keys
    }

    /// Keys in ascending order for a well-formed tree.
    pub fn inorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut pending = Vec::new();
        let mut cursor = self.root;

        loop {
            while let Some(id) = cursor {
                pending.push(id);
                cursor = self.node(id).left;
            }
            let Some(id) = pending.pop() else {
                break;
            };
            let node = self.node(id);
            keys.push(&node.key);
            cursor = node.right;
        }
        keys
    }

    /// Expected access cost of this exact shape:
    /// Σ (depth(k) + 1)·P[k] + Σ (depth(gap) + 1)·Q[gap].
    ///
    /// A missing left child of key `r` is gap `r - 1`, a missing right
    /// child is gap `r`; both sit one level below the node.
    pub fn realized_cost(&self, weights: &Weights) -> f64 {
        let (p, q) = (weights.keys(), weights.gaps());
        let Some(root) = self.root else {
            return q[0];
        };

        let mut cost = 0.0;
        let mut pending = vec![(root, 0usize)];
        while let Some((id, depth)) = pending.pop() {
            let node = self.node(id);
            let below = (depth + 2) as f64;
            cost += (depth + 1) as f64 * p[node.rank - 1];

            match node.left {
                Some(child) => pending.push((child, depth + 1)),
                None => cost += below * q[node.rank - 1],
            }
            match node.right {
                Some(child) => pending.push((child, depth + 1)),
                None => cost += below * q[node.rank],
            }
        }
        cost
    }
}

impl<K: Ord> SearchTree<K> {
    /// Attach `key` under the first free slot on its comparison path.
    ///
    /// Returns the number of comparisons made, i.e. the new node's depth.
    pub(crate) fn insert(&mut self, key: K, rank: usize) -> usize {
        let Some(mut cursor) = self.root else {
            self.root = Some(self.push(Node::leaf(key, rank)));
            return 0;
        };

        let mut steps = 1;
        loop {
            let goes_left = key < self.node(cursor).key;
            let slot = if goes_left {
                self.node(cursor).left
            } else {
                self.node(cursor).right
            };
            match slot {
                Some(next) => {
                    cursor = next;
                    steps += 1;
                }
                None => {
                    let id = self.push(Node::leaf(key, rank));
                    let parent = self.node_mut(cursor);
                    if goes_left {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    return steps;
                }
            }
        }
    }
}
