//! Precomputed range weights
//!
//! W(i, i)   = Q[i]
//! W(i, j)   = W(i, j-1) + (P[j-1] + Q[j])
//! Same additions in the same order as [`Weights::range_weight`], so every
//! cell is bit-identical to the inline sum.

use super::Weights;
use crate::table::SquareTable;

/// All `W(i, j)` for `0 ≤ i ≤ j ≤ n`, filled in O(n²).
#[derive(Debug, Clone)]
pub struct WeightTable {
    cells: SquareTable<f64>,
}

impl WeightTable {
    /// Fill the table row by row, extending each range one key at a time.
    pub fn build(weights: &Weights) -> Self {
        let n = weights.len();
        let (p, q) = (weights.keys(), weights.gaps());
        let mut cells = SquareTable::new(n + 1, 0.0);

        for i in 0..=n {
            let mut w = q[i];
            cells[(i, i)] = w;
            for j in i + 1..=n {
                w += p[j - 1] + q[j];
                cells[(i, j)] = w;
            }
        }

        Self { cells }
    }

    /// `W(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[(i, j)]
    }
}
