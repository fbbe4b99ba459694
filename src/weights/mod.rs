//! Access-weight vectors for keys and gaps
//!
//! P[i] = weight of the i-th key (sorted order), |P| = n
//! Q[i] = weight of the gap just before the i-th key, Q[n] = gap after the last key
//! Range weight: W(i, j) = Q[i] + Σ_{l=i+1}^{j} (P[l-1] + Q[l])

mod range;

pub use range::WeightTable;

use std::fmt;
use thiserror::Error;

/// Which of the two weight vectors a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightKind {
    /// Key weight (`P`).
    Key,
    /// Gap weight (`Q`).
    Gap,
}

impl fmt::Display for WeightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightKind::Key => write!(f, "key"),
            WeightKind::Gap => write!(f, "gap"),
        }
    }
}

/// Precondition violations detected while validating weights.
#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    /// `|Q|` must be exactly `|P| + 1`.
    #[error("expected {} gap weights for {keys} key weights, got {gaps}", .keys + 1)]
    LengthMismatch {
        /// Number of key weights supplied.
        keys: usize,
        /// Number of gap weights supplied.
        gaps: usize,
    },

    /// `|data|` must equal `|P|`.
    #[error("got {keys} keys for {weights} key weights")]
    KeyCountMismatch {
        /// Number of key values supplied.
        keys: usize,
        /// Number of key weights supplied.
        weights: usize,
    },

    /// A weight was below zero.
    #[error("{kind} weight {index} is negative ({value})")]
    NegativeWeight {
        /// Vector holding the offending weight.
        kind: WeightKind,
        /// Position inside that vector.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// A weight was NaN or infinite.
    #[error("{kind} weight {index} is not finite")]
    NonFiniteWeight {
        /// Vector holding the offending weight.
        kind: WeightKind,
        /// Position inside that vector.
        index: usize,
    },
}

/// Validated key weights `P` and gap weights `Q`.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    keys: Vec<f64>,
    gaps: Vec<f64>,
}

impl Weights {
    /// Validate and take ownership of `P` (keys) and `Q` (gaps).
    pub fn new(keys: Vec<f64>, gaps: Vec<f64>) -> Result<Self, WeightsError> {
        if gaps.len() != keys.len() + 1 {
            return Err(WeightsError::LengthMismatch {
                keys: keys.len(),
                gaps: gaps.len(),
            });
        }
        check_values(WeightKind::Key, &keys)?;
        check_values(WeightKind::Gap, &gaps)?;

        Ok(Self { keys, gaps })
    }

    /// Number of keys `n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when there are no keys (a single gap remains).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key weights `P`.
    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// Gap weights `Q`.
    pub fn gaps(&self) -> &[f64] {
        &self.gaps
    }

    /// Total weight of the gap range `[i, j]` and the keys strictly inside it.
    ///
    /// Summed left to right; [`WeightTable`] reproduces the same order.
    pub fn range_weight(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i <= j && j <= self.len(), "range [{i}, {j}] out of bounds");

        let mut w = self.gaps[i];
        for l in i + 1..=j {
            w += self.keys[l - 1] + self.gaps[l];
        }
        w
    }

    /// Σ Q[i], the cost floor of any tree over these weights.
    pub fn gap_total(&self) -> f64 {
        self.gaps.iter().sum()
    }
}

fn check_values(kind: WeightKind, values: &[f64]) -> Result<(), WeightsError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(WeightsError::NonFiniteWeight { kind, index });
        }
        if value < 0.0 {
            return Err(WeightsError::NegativeWeight { kind, index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_gap_count_mismatch() {
        let err = Weights::new(vec![0.5, 0.5], vec![0.0, 0.0]).unwrap_err();
        assert_eq!(err, WeightsError::LengthMismatch { keys: 2, gaps: 2 });
    }

    #[test]
    fn rejects_negative_and_nan() {
        let err = Weights::new(vec![0.1, -0.2], vec![0.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            WeightsError::NegativeWeight {
                kind: WeightKind::Key,
                index: 1,
                ..
            }
        ));

        let err = Weights::new(vec![0.1], vec![0.0, f64::NAN]).unwrap_err();
        assert_eq!(
            err,
            WeightsError::NonFiniteWeight {
                kind: WeightKind::Gap,
                index: 1
            }
        );
    }

    #[test]
    fn empty_key_set_is_valid() {
        let weights = Weights::new(vec![], vec![0.4]).unwrap();
        assert!(weights.is_empty());
        assert_eq!(weights.range_weight(0, 0), 0.4);
    }

    #[test]
    fn range_weight_covers_keys_and_gaps() {
        let weights = Weights::new(vec![1.0, 2.0], vec![0.5, 0.25, 0.125]).unwrap();
        assert_eq!(weights.range_weight(0, 0), 0.5);
        assert_eq!(weights.range_weight(1, 2), 0.25 + 2.0 + 0.125);
        assert_eq!(weights.range_weight(0, 2), 0.5 + 1.0 + 0.25 + 2.0 + 0.125);
        assert_eq!(weights.gap_total(), 0.875);
    }
}
