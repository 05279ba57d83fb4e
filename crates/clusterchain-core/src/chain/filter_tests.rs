//! Tests for leaf-only filtering.

use super::builder::ChainBuilder;
use super::filter::{filter_leaves_only, filter_leaves_only_in_place};
use super::set::ChainSet;
use super::types::Chain;
use crate::cluster::Cluster;

/// Lasso: leaf 0 on junction 1, loop 1 - 2 - 3 - 1, plus spur 1 - 4.
fn build_lasso_with_spur() -> Vec<Chain> {
    let cluster =
        Cluster::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 1), (1, 4)]).unwrap();
    ChainBuilder::new().build(&cluster).0
}

#[test]
fn test_filter_keeps_only_leaf_chains() {
    let chains = build_lasso_with_spur();
    assert_eq!(chains.len(), 3);

    let leaves = filter_leaves_only(&chains);
    assert_eq!(leaves.len(), 2);
    assert!(leaves.iter().all(Chain::is_leaf));
    assert_eq!(chains.len(), 3);
}

#[test]
fn test_filter_in_place_matches_copy() {
    let chains = build_lasso_with_spur();
    let expected = filter_leaves_only(&chains);

    let mut in_place = chains;
    filter_leaves_only_in_place(&mut in_place);
    assert_eq!(in_place, expected);
}

#[test]
fn test_filter_cycle_only_is_empty() {
    let cluster = Cluster::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
    let chains = ChainBuilder::new().build(&cluster).0;
    assert!(filter_leaves_only(&chains).is_empty());
}

#[test]
fn test_retain_leaves_copies_shared_set() {
    let shared = ChainSet::from_vec(build_lasso_with_spur());
    let mut view = shared.clone();
    assert!(view.shares_storage_with(&shared));

    view.retain_leaves();
    assert!(!view.shares_storage_with(&shared));
    assert_eq!(view.len(), 2);
    assert_eq!(shared.len(), 3);
}
