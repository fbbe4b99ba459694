//! Bottom-up cost/split computation
//!
//! M[i][i] = Q[i]
//! M[i][j] = min_{r ∈ [i+1, j]} ( M[i][r-1] + M[r][j] ) + W(i, j)
//! B[i][j] = first r reaching the minimum (lowest index wins ties)
//!
//! Ranges are filled by increasing width, so both halves of every
//! candidate split are final before they are read.

use tracing::debug;

use super::SquareTable;
use crate::weights::{WeightTable, Weights};

/// Sentinel stored in split cells that have no root (base cases).
const NO_SPLIT: usize = 0;

/// How the DP obtains `W(i, j)` for each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightMode {
    /// Sum the range inline for every cell: O(n) extra per cell.
    Recompute,
    /// Look the range up in a precomputed [`WeightTable`].
    #[default]
    Incremental,
}

enum RangeWeights<'a> {
    Inline(&'a Weights),
    Table(WeightTable),
}

impl RangeWeights<'_> {
    #[inline]
    fn get(&self, i: usize, j: usize) -> f64 {
        match self {
            RangeWeights::Inline(weights) => weights.range_weight(i, j),
            RangeWeights::Table(table) => table.get(i, j),
        }
    }
}

/// Minimum expected access cost per gap range.
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    cells: SquareTable<f64>,
}

impl CostTable {
    /// `M[i][j]`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[(i, j)]
    }

    /// Number of keys covered by the full range.
    pub fn key_count(&self) -> usize {
        self.cells.size() - 1
    }

    /// Cost of the whole tree, `M[0][n]`.
    pub fn optimal(&self) -> f64 {
        self.get(0, self.key_count())
    }
}

/// Root chosen for every gap range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTable {
    roots: SquareTable<usize>,
}

impl SplitTable {
    /// 1-based key index rooting range `[i, j]`, or `None` for a base case.
    ///
    /// When present the index lies in `[i + 1, j]`.
    #[inline]
    pub fn root(&self, i: usize, j: usize) -> Option<usize> {
        match self.roots[(i, j)] {
            NO_SPLIT => None,
            r => Some(r),
        }
    }

    /// Number of keys covered by the full range.
    pub fn key_count(&self) -> usize {
        self.roots.size() - 1
    }

    /// Root of the whole tree.
    pub fn global_root(&self) -> Option<usize> {
        self.root(0, self.key_count())
    }

    /// Digest of every meaningful cell.
    ///
    /// Two builds produce the same tree shape iff their fingerprints match.
    pub fn fingerprint(&self) -> blake3::Hash {
        let n = self.key_count();
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(n as u64).to_le_bytes());
        for i in 0..=n {
            for j in i..=n {
                hasher.update(&(self.roots[(i, j)] as u64).to_le_bytes());
            }
        }
        hasher.finalize()
    }
}

/// Output of one DP run.
#[derive(Debug, Clone)]
pub struct DpTables {
    /// Cost per range.
    pub cost: CostTable,
    /// Root per range.
    pub split: SplitTable,
}

impl DpTables {
    /// Optimal expected cost of the full tree.
    pub fn optimal_cost(&self) -> f64 {
        self.cost.optimal()
    }
}

/// Run the optimal-tree DP over validated weights.
///
/// Time O(n³), space O(n²). `mode` only changes how range weights are
/// obtained; both modes produce bit-identical tables.
pub fn build_tables(weights: &Weights, mode: WeightMode) -> DpTables {
    let n = weights.len();
    let q = weights.gaps();
    let range = match mode {
        WeightMode::Recompute => RangeWeights::Inline(weights),
        WeightMode::Incremental => RangeWeights::Table(WeightTable::build(weights)),
    };

    let mut cost = SquareTable::new(n + 1, 0.0);
    let mut split = SquareTable::new(n + 1, NO_SPLIT);
    for i in 0..=n {
        cost[(i, i)] = q[i];
    }

    for width in 1..=n {
        for i in 0..=n - width {
            let j = i + width;
            let w = range.get(i, j);

            let mut best = f64::INFINITY;
            let mut best_root = NO_SPLIT;
            for r in i + 1..=j {
                let candidate = cost[(i, r - 1)] + cost[(r, j)] + w;
                // Non-base ranges always get a root, even if every candidate overflows.
                if best_root == NO_SPLIT || candidate < best {
                    best = candidate;
                    best_root = r;
                }
            }

            cost[(i, j)] = best;
            split[(i, j)] = best_root;
        }
    }

    let tables = DpTables {
        cost: CostTable { cells: cost },
        split: SplitTable { roots: split },
    };
    debug!(
        keys = n,
        ?mode,
        cost = tables.optimal_cost(),
        root = ?tables.split.global_root(),
        "cost tables built"
    );
    tables
}
