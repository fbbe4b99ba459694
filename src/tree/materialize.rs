//! Turning a split table into linked nodes
//!
//! Two shape policies:
//!   SplitTable     - children linked exactly as B[i][j] dictates
//!   InsertionOrder - split sequence inserted one key at a time by comparison
//! With strictly increasing keys the pre-order of a BST rebuilds that same
//! BST under plain insertion, so both policies agree.

use super::{Node, NodeId, SearchTree};
use crate::table::SplitTable;

/// How the materializer assigns children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapePolicy {
    /// Link each range root to the roots of its two sub-ranges.
    #[default]
    SplitTable,
    /// Insert the split sequence root-first using key comparison.
    InsertionOrder,
}

/// Build the tree for `keys` under the chosen policy.
///
/// `sequence` must be the [`split_sequence`](super::split_sequence) of `split`.
pub(crate) fn materialize<K: Ord + Clone>(
    split: &SplitTable,
    sequence: &[usize],
    keys: &[K],
    policy: ShapePolicy,
) -> SearchTree<K> {
    match policy {
        ShapePolicy::SplitTable => link_from_splits(split, keys),
        ShapePolicy::InsertionOrder => insert_in_order(sequence, keys).0,
    }
}

/// Link nodes directly from the split table.
pub(crate) fn link_from_splits<K: Clone>(split: &SplitTable, keys: &[K]) -> SearchTree<K> {
    debug_assert_eq!(split.key_count(), keys.len());

    let mut tree = SearchTree::with_capacity(keys.len());
    let root = link_range(&mut tree, split, keys, 0, keys.len());
    tree.root = root;
    tree
}

fn link_range<K: Clone>(
    tree: &mut SearchTree<K>,
    split: &SplitTable,
    keys: &[K],
    i: usize,
    j: usize,
) -> Option<NodeId> {
    let r = split.root(i, j)?;
    let id = tree.push(Node::leaf(keys[r - 1].clone(), r));
    let left = link_range(tree, split, keys, i, r - 1);
    let right = link_range(tree, split, keys, r, j);

    let node = tree.node_mut(id);
    node.left = left;
    node.right = right;
    Some(id)
}

/// Insert keys in `sequence` order (1-based indices into `keys`).
///
/// Also returns, per inserted key, the number of comparisons made on the
/// way down. That count is the key's depth in the finished tree.
pub(crate) fn insert_in_order<K: Ord + Clone>(
    sequence: &[usize],
    keys: &[K],
) -> (SearchTree<K>, Vec<usize>) {
    let mut tree = SearchTree::with_capacity(sequence.len());
    let descents = sequence
        .iter()
        .map(|&r| tree.insert(keys[r - 1].clone(), r))
        .collect();
    (tree, descents)
}
