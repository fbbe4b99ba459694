//! Degenerate inputs and precondition violations

use obst::{ObstError, OptimalTree, QueryError, WeightKind, WeightsError};
use test_case::test_case;
use test_helpers::*;

#[test_case(0.0 ; "zero gap")]
#[test_case(0.4 ; "fractional gap")]
#[test_case(3.0 ; "heavy gap")]
fn empty_key_set_costs_lone_gap(gap: f64) {
    let mut tree = OptimalTree::<i32>::new(vec![], vec![gap], vec![]).unwrap();
    let report = tree.build_report();

    assert_eq!(report.cost, gap);
    assert_eq!(report.root, None);
    assert!(report.sequence.is_empty());
    assert!(tree.tree().is_empty());
    assert_eq!(tree.search(&1), Err(QueryError::NotFound));
    assert_eq!(tree.depth(&1), Err(QueryError::NotFound));
}

#[test_case(0.3, 0.2, 0.5, 1.7 ; "uneven gaps")]
#[test_case(1.0, 0.0, 0.0, 1.0 ; "key only")]
#[test_case(0.0, 1.0, 1.0, 4.0 ; "gaps only")]
fn single_key_tree(p: f64, left: f64, right: f64, expected: f64) {
    let mut tree = OptimalTree::new(vec![p], vec![left, right], vec![42]).unwrap();
    let cost = tree.build();

    assert!(approx_eq(cost, expected), "cost {cost} vs {expected}");
    assert_eq!(tree.tree().len(), 1);
    assert_eq!(tree.depth(&42), Ok(0));
    assert_eq!(tree.search(&42), Ok(&42));
    assert_eq!(tree.search(&41), Err(QueryError::NotFound));
}

#[test_case(vec![0.1, 0.2], vec![0.1, 0.1] ; "too few gaps")]
#[test_case(vec![0.1], vec![0.1, 0.1, 0.1] ; "too many gaps")]
#[test_case(vec![], vec![] ; "no gaps at all")]
fn gap_count_must_exceed_key_count_by_one(p: Vec<f64>, q: Vec<f64>) {
    let keys: Vec<i32> = (0..p.len() as i32).collect();
    let (keys_len, gaps_len) = (p.len(), q.len());
    let err = OptimalTree::new(p, q, keys).unwrap_err();
    assert_eq!(
        err,
        ObstError::Weights(WeightsError::LengthMismatch {
            keys: keys_len,
            gaps: gaps_len
        })
    );
}

#[test_case(vec![-0.1, 0.2], vec![0.1; 3], WeightKind::Key, 0 ; "negative key weight")]
#[test_case(vec![0.1, 0.2], vec![0.1, 0.1, -1.0], WeightKind::Gap, 2 ; "negative gap weight")]
fn negative_weights_rejected(p: Vec<f64>, q: Vec<f64>, kind: WeightKind, index: usize) {
    let err = OptimalTree::new(p, q, vec![1, 2]).unwrap_err();
    assert!(
        matches!(
            err,
            ObstError::Weights(WeightsError::NegativeWeight { kind: k, index: i, .. })
                if k == kind && i == index
        ),
        "unexpected error {err:?}"
    );
}

#[test]
fn infinite_weight_rejected() {
    let err = OptimalTree::new(vec![f64::INFINITY], vec![0.1, 0.1], vec![1]).unwrap_err();
    assert_eq!(
        err,
        ObstError::Weights(WeightsError::NonFiniteWeight {
            kind: WeightKind::Key,
            index: 0
        })
    );
}

#[test]
fn equal_weights_break_ties_toward_first_key() {
    let mut tree = OptimalTree::new(vec![1.0, 1.0], vec![0.0; 3], vec![1, 2]).unwrap();
    let report = tree.build_report();

    assert_eq!(report.cost, 3.0);
    assert_eq!(report.root, Some(1));
    assert_eq!(tree.depth(&1), Ok(0));
    assert_eq!(tree.depth(&2), Ok(1));
}

#[test]
fn overflowing_weights_keep_every_key() {
    let mut tree = OptimalTree::new(vec![f64::MAX, f64::MAX], vec![0.0; 3], vec![1, 2]).unwrap();
    let report = tree.build_report();

    assert!(report.cost.is_infinite());
    assert_eq!(report.sequence.len(), 2);
    assert_eq!(tree.tree().len(), 2);
    assert_eq!(tree.search(&1), Ok(&1));
    assert_eq!(tree.search(&2), Ok(&2));
}
