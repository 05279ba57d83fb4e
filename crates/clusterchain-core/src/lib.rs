//! # clusterchain
//!
//! Chain decomposition and caching for undirected node/edge clusters.
//!
//! A cluster (typically the connectivity graph of a point-cloud segment) is
//! decomposed into *chains*: maximal paths through degree-2 nodes that end at
//! leaves or junctions. Chains are built once per cluster, walked in parallel
//! on rayon, deduplicated by a direction-independent hash and cached on the
//! cluster. Callers can then request views split at breakpoint markers or
//! narrowed to leaf chains without touching the cached set.
//!
//! ## Quick Start
//!
//! ```rust
//! use clusterchain_core::{ChainEngine, Cluster};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Star: centre 0 with three leaves.
//!     let cluster = Cluster::from_edges(4, &[(0, 1), (0, 2), (0, 3)])?;
//!     let engine = ChainEngine::new();
//!
//!     let (chains, ok) = engine.get_or_build_chains(&cluster, None, false);
//!     assert!(ok);
//!     assert_eq!(chains.len(), 3);
//!     assert!(chains.iter().all(|c| c.is_leaf() && !c.is_closed_loop()));
//!
//!     // The second call is served from the cluster cache.
//!     let (again, _) = engine.get_or_build_chains(&cluster, None, false);
//!     assert!(again.shares_storage_with(&chains));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in crate Cargo.toml [lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::cast_possible_truncation
    )
)]

pub mod chain;
pub mod cluster;
pub mod config;
pub mod error;

pub use chain::{
    apply_breakpoints, filter_leaves_only, filter_leaves_only_in_place, Chain, ChainBuildStats,
    ChainBuilder, ChainEngine, ChainRequest, ChainSet,
};
pub use cluster::{Cluster, ClusterCache, ClusterView, EdgeIndex, Link, NodeIndex, NodeRole};
pub use config::{ChainConfig, ThreadConfig};
pub use error::{Error, Result};
