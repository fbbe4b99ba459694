//! Brute-force optimal cost, used as an oracle for small key sets.

use crate::weights::Weights;

/// Optimal expected cost of the gap range `[i, j]`, trying every root.
///
/// No memoization: the running time is exponential in `j - i`. Keep it to
/// a handful of keys.
pub fn exhaustive_cost(weights: &Weights, i: usize, j: usize) -> f64 {
    if i == j {
        return weights.gaps()[i];
    }

    let w = weights.range_weight(i, j);
    (i + 1..=j)
        .map(|r| exhaustive_cost(weights, i, r - 1) + exhaustive_cost(weights, r, j) + w)
        .fold(f64::INFINITY, f64::min)
}
