//! Split-table walk
//!
//! Pre-order over gap ranges, starting from [0, n]:
//!   emit B[i][j], then [i, r-1], then [r, j]
//! Base ranges emit nothing. Explicit stack, depth bounded by n.

use crate::table::SplitTable;

/// 1-based key indices in root-first order; the first entry is the global root.
///
/// Exactly one entry per key.
pub fn split_sequence(split: &SplitTable) -> Vec<usize> {
    let n = split.key_count();
    let mut sequence = Vec::with_capacity(n);
    let mut pending = vec![(0, n)];

    while let Some((i, j)) = pending.pop() {
        let Some(r) = split.root(i, j) else {
            continue;
        };
        sequence.push(r);
        // Right pushed first so the left range is walked first.
        pending.push((r, j));
        pending.push((i, r - 1));
    }

    sequence
}
