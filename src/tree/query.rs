//! Exact-match search and depth queries
//!
//! Both walk the same comparison path used at insertion time and never
//! mutate the tree. Cost is O(height), not necessarily O(log n).

use thiserror::Error;

use super::{NodeId, SearchTree};

/// Failure of a read-only tree query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The key is absent, or the tree holds no keys at all.
    #[error("no such key in tree")]
    NotFound,
}

impl<K: Ord> SearchTree<K> {
    /// Stored key equal to `key`.
    pub fn search(&self, key: &K) -> Result<&K, QueryError> {
        self.locate(key).map(|(id, _)| &self.node(id).key)
    }

    /// Edges from the root to the node holding `key`.
    pub fn depth(&self, key: &K) -> Result<usize, QueryError> {
        self.locate(key).map(|(_, depth)| depth)
    }

    /// True when `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.locate(key).is_ok()
    }

    fn locate(&self, key: &K) -> Result<(NodeId, usize), QueryError> {
        let mut cursor = self.root;
        let mut depth = 0;

        while let Some(id) = cursor {
            let node = self.node(id);
            if *key == node.key {
                return Ok((id, depth));
            }
            cursor = if *key < node.key { node.left } else { node.right };
            depth += 1;
        }

        Err(QueryError::NotFound)
    }
}
