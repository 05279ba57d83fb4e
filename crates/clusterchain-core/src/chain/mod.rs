//! Chain decomposition of clusters.
//!
//! A chain is a maximal path that runs through binary (degree 2) nodes and
//! stops at leaves or junctions. Every edge of a cluster lies on exactly one
//! topology chain, except for all-binary cycles that no seed reaches.
//!
//! The module is split into:
//! - [`types`]: the [`Chain`] entity and its direction-independent hash
//! - [`builder`]: seed selection and the (parallel) walk
//! - [`breakpoints`]: re-segmentation at caller-marked points
//! - [`engine`]: cached access via [`ChainEngine`]
//!
//! # Example
//!
//! ```rust
//! use clusterchain_core::chain::ChainEngine;
//! use clusterchain_core::cluster::Cluster;
//!
//! // Path 0 - 1 - 2 - 3 with node 2 marked as a breakpoint.
//! let cluster = Cluster::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
//! let engine = ChainEngine::new();
//!
//! let (whole, ok) = engine.get_or_build_chains(&cluster, None, false);
//! assert!(ok);
//! assert_eq!(whole.len(), 1);
//!
//! let marks = [false, false, true, false];
//! let (split, ok) = engine.get_or_build_chains(&cluster, Some(&marks), false);
//! assert!(ok);
//! assert_eq!(split.len(), 2);
//! ```

pub mod breakpoints;
pub mod builder;
mod dedup;
pub mod engine;
mod filter;
mod set;
mod stats;
pub mod types;

#[cfg(test)]
mod filter_tests;

pub use breakpoints::apply_breakpoints;
pub use builder::{collect_seeds, walk_chain, ChainBuilder};
pub use dedup::dedup_chains;
pub use engine::{ChainEngine, ChainRequest, CHAIN_CACHE_KEY, CHAIN_CONTEXT_HASH};
pub use filter::{filter_leaves_only, filter_leaves_only_in_place};
pub use set::ChainSet;
pub use stats::ChainBuildStats;
pub use types::Chain;
