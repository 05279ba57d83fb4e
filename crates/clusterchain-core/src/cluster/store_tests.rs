//! Tests for the in-memory cluster store.

use super::store::Cluster;
use super::types::{EdgeIndex, Link, NodeRole};
use super::view::ClusterView;
use crate::error::Error;

/// Path 0 - 1 - 2 with a spur 1 - 3.
fn build_t_cluster() -> Cluster {
    Cluster::from_edges(4, &[(0, 1), (1, 2), (1, 3)]).unwrap()
}

#[test]
fn test_add_node_and_edge() {
    let mut cluster = Cluster::new();
    let a = cluster.add_node(10);
    let b = cluster.add_node(20);
    let e = cluster.add_edge(a, b).unwrap();

    assert_eq!(cluster.node_count(), 2);
    assert_eq!(cluster.edge_count(), 1);
    assert_eq!(cluster.point_index(a), 10);
    assert_eq!(cluster.point_index(b), 20);
    assert_eq!(cluster.links(a), &[Link::new(b, e)]);
    assert_eq!(cluster.links(b), &[Link::new(a, e)]);
    assert_eq!(cluster.edge_endpoints(e), Some((a, b)));
}

#[test]
fn test_add_edge_missing_node_fails() {
    let mut cluster = Cluster::new();
    cluster.add_node(0);
    assert_eq!(cluster.add_edge(0, 5), Err(Error::NodeNotFound(5)));
    assert_eq!(cluster.add_edge(9, 0), Err(Error::NodeNotFound(9)));
    assert_eq!(cluster.edge_count(), 0);
}

#[test]
fn test_add_self_loop_fails() {
    let mut cluster = Cluster::new();
    cluster.add_node(0);
    assert_eq!(cluster.add_edge(0, 0), Err(Error::SelfLoop(0)));
}

#[test]
fn test_roles_from_degree() {
    let mut cluster = build_t_cluster();
    let isolated = cluster.add_node(4);

    assert_eq!(cluster.role(0), NodeRole::Leaf);
    assert_eq!(cluster.role(1), NodeRole::Junction);
    assert_eq!(cluster.role(2), NodeRole::Leaf);
    assert_eq!(cluster.role(isolated), NodeRole::Empty);
    assert!(cluster.is_empty(isolated));
    assert_eq!(cluster.num_leaves(), 3);
    assert_eq!(cluster.num_junctions(), 1);
    assert_eq!(cluster.iter_junctions().count(), 1);
}

#[test]
fn test_parallel_edges_make_binary_nodes() {
    let cluster = Cluster::from_edges(2, &[(0, 1), (0, 1)]).unwrap();
    assert_eq!(cluster.role(0), NodeRole::Binary);
    assert_eq!(cluster.role(1), NodeRole::Binary);
    assert_eq!(cluster.other_link(1, 0), Some(Link::new(0, 1)));
}

#[test]
fn test_neighbor_via_and_other_link() {
    let cluster = Cluster::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    assert_eq!(cluster.neighbor_via(1, 0), Some(0));
    assert_eq!(cluster.neighbor_via(1, 1), Some(2));
    assert_eq!(cluster.neighbor_via(0, 1), None);
    assert_eq!(cluster.other_link(1, 0), Some(Link::new(2, 1)));
}

#[test]
fn test_traversal_takes_edge_indices_from_add_edge() {
    let mut cluster = Cluster::new();
    let nodes: Vec<_> = (0..3).map(|i| cluster.add_node(i)).collect();
    // Insert in reverse so edge and node indices disagree.
    let right: EdgeIndex = cluster.add_edge(nodes[2], nodes[1]).unwrap();
    let left: EdgeIndex = cluster.add_edge(nodes[1], nodes[0]).unwrap();
    assert_eq!((right, left), (0, 1));

    assert_eq!(cluster.neighbor_via(nodes[1], left), Some(nodes[0]));
    assert_eq!(cluster.neighbor_via(nodes[1], right), Some(nodes[2]));
    assert_eq!(cluster.other_link(nodes[1], left), Some(Link::new(nodes[2], right)));
    assert_eq!(cluster.other_link(nodes[0], left), None);
}

#[test]
fn test_edge_other_endpoint() {
    let cluster = build_t_cluster();
    let edge = cluster.edge(2).unwrap();
    assert_eq!(edge.other(1), Some(3));
    assert_eq!(edge.other(3), Some(1));
    assert_eq!(edge.other(0), None);
}

#[test]
fn test_mutation_clears_cache() {
    let mut cluster = build_t_cluster();
    cluster.cache().get_or_build("probe", 0, || Some(1u32));
    assert!(cluster.cache().contains("probe"));

    cluster.add_node(99);
    assert!(cluster.cache().is_empty());
}

#[test]
fn test_clone_starts_with_empty_cache() {
    let cluster = build_t_cluster();
    cluster.cache().get_or_build("probe", 0, || Some(1u32));

    let copy = cluster.clone();
    assert_eq!(copy.node_count(), cluster.node_count());
    assert_eq!(copy.edges(), cluster.edges());
    assert!(copy.cache().is_empty());
    assert!(!cluster.cache().is_empty());
}
