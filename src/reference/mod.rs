//! Ordered-container comparison index
//!
//! Balanced ordered set over the same keys, answering membership and
//! sorted position. Only used to cross-check the optimal tree's answers.

use std::collections::BTreeSet;

/// Sorted key set with rank lookups.
#[derive(Debug, Clone, Default)]
pub struct RankIndex<K> {
    keys: BTreeSet<K>,
}

impl<K: Ord> RankIndex<K> {
    /// Collect the keys into the set; duplicates collapse.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Stored key equal to `key`.
    pub fn search(&self, key: &K) -> Option<&K> {
        self.keys.get(key)
    }

    /// 0-based position of `key` among the sorted keys.
    pub fn rank(&self, key: &K) -> Option<usize> {
        self.keys.get(key)?;
        Some(self.keys.range(..key).count())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when no keys were supplied.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
