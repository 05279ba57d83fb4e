//! Cluster graph view consumed by the chain engine.
//!
//! A cluster is an undirected node/edge structure addressed by dense arena
//! indices. The engine only reads it through [`ClusterView`]; [`Cluster`] is
//! the in-memory implementation shipped with the crate.
//!
//! # Example
//!
//! ```rust
//! use clusterchain_core::cluster::{Cluster, ClusterView, NodeRole};
//!
//! // Star: centre 0 with three leaves.
//! let cluster = Cluster::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
//! assert_eq!(cluster.role(0), NodeRole::Junction);
//! assert_eq!(cluster.num_leaves(), 3);
//! ```

mod cache;
mod store;
mod types;
mod view;

#[cfg(test)]
mod cache_tests;
#[cfg(test)]
mod store_tests;

pub use cache::ClusterCache;
pub use store::{Cluster, ClusterEdge, ClusterNode};
pub use types::{EdgeIndex, Link, NodeIndex, NodeRole};
pub use view::ClusterView;
