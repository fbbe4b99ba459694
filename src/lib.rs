//! # Optimal Binary Search Trees
//!
//! Builds the binary search tree with minimum expected access cost for a
//! set of sorted keys, given the access weight of every key (`P`) and of
//! every gap between or around them (`Q`).
//!
//! ## Pipeline
//!
//! 1. **Cost tables**: bottom-up DP over gap ranges, O(n³) time, O(n²) space
//! 2. **Reconstruction**: pre-order walk of the split table (root first)
//! 3. **Materialization**: arena tree linked from the split table
//! 4. **Queries**: exact-match search and depth from the root
//!
//! Each stage consumes only the previous stage's output. The tables are
//! dropped at the end of every build; only the tree survives.
//!
//! Comparison convention: smaller keys go left, keys not smaller go right.
//!
//! ## Usage Example
//!
//! ```
//! use obst::OptimalTree;
//!
//! let p = vec![0.15, 0.10, 0.05, 0.10, 0.20];
//! let q = vec![0.05, 0.10, 0.05, 0.05, 0.05, 0.10];
//! let mut tree = OptimalTree::new(p, q, vec![1, 2, 3, 4, 5])?;
//!
//! let cost = tree.build();
//! assert!((cost - 2.75).abs() < 1e-9);
//! assert_eq!(tree.depth(&2)?, 0);
//! # Ok::<(), obst::ObstError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod reference; // Ordered-container cross-check
pub mod table;     // Cost/split dynamic program
pub mod tree;      // Arena tree, reconstruction, queries
pub mod weights;   // Validated P/Q vectors

pub use reference::RankIndex;
pub use table::{build_tables, exhaustive_cost, CostTable, DpTables, SplitTable, WeightMode};
pub use tree::{split_sequence, QueryError, SearchTree, ShapePolicy};
pub use weights::{WeightKind, Weights, WeightsError};

use thiserror::Error;
use tracing::{debug, info_span};

/// Errors surfaced by construction and queries.
#[derive(Error, Debug, PartialEq)]
pub enum ObstError {
    /// Weight vectors or key count are inconsistent.
    #[error("invalid weights: {0}")]
    Weights(#[from] WeightsError),

    /// Keys are not strictly increasing.
    #[error("key {index} is not greater than the key before it")]
    UnsortedKeys {
        /// Position of the first offending key.
        index: usize,
    },

    /// Query against a key that is not in the tree.
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Knobs for a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// How children are assigned during materialization.
    pub shape: ShapePolicy,

    /// How range weights are obtained during the DP.
    pub weights: WeightMode,
}

impl BuildConfig {
    /// Set the materialization policy.
    pub fn with_shape(mut self, shape: ShapePolicy) -> Self {
        self.shape = shape;
        self
    }

    /// Set the range-weight strategy.
    pub fn with_weight_mode(mut self, weights: WeightMode) -> Self {
        self.weights = weights;
        self
    }
}

/// Summary of one build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Optimal expected access cost.
    pub cost: f64,

    /// 1-based index of the root key, `None` without keys.
    pub root: Option<usize>,

    /// Split sequence that drove materialization (1-based, root first).
    pub sequence: Vec<usize>,

    /// Split-table digest; equal inputs give equal fingerprints.
    pub fingerprint: blake3::Hash,
}

/// Optimal search tree over a fixed key set.
///
/// Construction validates the inputs; [`build`](Self::build) runs the DP and
/// materializes the tree. Queries before the first build see an empty tree.
#[derive(Debug, Clone)]
pub struct OptimalTree<K> {
    weights: Weights,
    keys: Vec<K>,
    config: BuildConfig,
    tree: SearchTree<K>,
}

impl<K: Ord + Clone> OptimalTree<K> {
    /// Validate `P` (key weights), `Q` (gap weights) and the sorted keys.
    pub fn new(p: Vec<f64>, q: Vec<f64>, keys: Vec<K>) -> Result<Self, ObstError> {
        if keys.len() != p.len() {
            return Err(WeightsError::KeyCountMismatch {
                keys: keys.len(),
                weights: p.len(),
            }
            .into());
        }
        let weights = Weights::new(p, q)?;
        if let Some(index) = keys.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(ObstError::UnsortedKeys { index: index + 1 });
        }

        Ok(Self {
            weights,
            keys,
            config: BuildConfig::default(),
            tree: SearchTree::new(),
        })
    }

    /// Replace the build configuration.
    pub fn with_config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    /// Build and return the optimal expected cost.
    pub fn build(&mut self) -> f64 {
        self.build_report().cost
    }

    /// Build and return the full report.
    ///
    /// Rebuilding replaces the previous tree; the result is identical for
    /// identical inputs and configuration.
    pub fn build_report(&mut self) -> BuildReport {
        let span = info_span!("obst_build", keys = self.keys.len());
        let _enter = span.enter();

        let tables = {
            let span = info_span!("cost_tables");
            let _enter = span.enter();
            build_tables(&self.weights, self.config.weights)
        };

        let sequence = {
            let span = info_span!("reconstruct");
            let _enter = span.enter();
            split_sequence(&tables.split)
        };

        self.tree = {
            let span = info_span!("materialize", policy = ?self.config.shape);
            let _enter = span.enter();
            tree::materialize(&tables.split, &sequence, &self.keys, self.config.shape)
        };
        debug!(height = self.tree.height(), "tree materialized");

        BuildReport {
            cost: tables.optimal_cost(),
            root: tables.split.global_root(),
            sequence,
            fingerprint: tables.split.fingerprint(),
        }
    }

    /// Stored key equal to `key`.
    pub fn search(&self, key: &K) -> Result<&K, QueryError> {
        self.tree.search(key)
    }

    /// Edges from the root to `key`.
    pub fn depth(&self, key: &K) -> Result<usize, QueryError> {
        self.tree.depth(key)
    }

    /// The materialized tree (empty before the first build).
    pub fn tree(&self) -> &SearchTree<K> {
        &self.tree
    }

    /// Validated weights.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Active configuration.
    pub fn config(&self) -> BuildConfig {
        self.config
    }
}
