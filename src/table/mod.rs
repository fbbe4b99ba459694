//! Cost and split tables for the optimal-tree dynamic program
//!
//! Cells are indexed by gap range [i, j], 0 ≤ i ≤ j ≤ n.
//! Diagonal cells are base cases (a lone gap, no key to split on).
//! Tables are scratch state: built per call, never cached on the tree.

mod cost;
mod exhaustive;

pub use cost::{build_tables, CostTable, DpTables, SplitTable, WeightMode};
pub use exhaustive::exhaustive_cost;

use std::ops::{Index, IndexMut};

/// Dense row-major `size × size` table.
///
/// Only the upper triangle (`i ≤ j`) carries meaning for the DP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareTable<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> SquareTable<T> {
    /// Allocate a table with every cell set to `fill`.
    pub fn new(size: usize, fill: T) -> Self {
        Self {
            size,
            cells: vec![fill; size * size],
        }
    }
}

impl<T> SquareTable<T> {
    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    fn offset(&self, (i, j): (usize, usize)) -> usize {
        debug_assert!(i < self.size && j < self.size, "cell ({i}, {j}) out of bounds");
        i * self.size + j
    }
}

impl<T> Index<(usize, usize)> for SquareTable<T> {
    type Output = T;

    fn index(&self, cell: (usize, usize)) -> &T {
        &self.cells[self.offset(cell)]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareTable<T> {
    fn index_mut(&mut self, cell: (usize, usize)) -> &mut T {
        let offset = self.offset(cell);
        &mut self.cells[offset]
    }
}
