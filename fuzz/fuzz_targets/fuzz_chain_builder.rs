//! Fuzz target for chain building and breakpoint splitting.
//!
//! Builds arbitrary multigraphs and checks that:
//! - building and splitting never panic
//! - every edge lands on exactly one chain when cycle cover is on
//! - splitting neither loses nor duplicates edges
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_chain_builder
//! ```

#![no_main]

use arbitrary::Arbitrary;
use clusterchain_core::chain::{apply_breakpoints, ChainBuilder};
use clusterchain_core::{Chain, ChainConfig, Cluster, ClusterView};
use libfuzzer_sys::fuzz_target;

/// Fuzzing input for chain building.
#[derive(Arbitrary, Debug)]
struct ClusterInput {
    /// Number of nodes (reduced modulo a small bound)
    node_count: u8,
    /// Edge endpoints (reduced modulo `node_count`)
    edges: Vec<(u8, u8)>,
    /// Breakpoint markers per point index
    marks: Vec<bool>,
    /// Walk seeds on the rayon pool
    parallel: bool,
}

fn sorted_edges(chains: &[Chain]) -> Vec<usize> {
    let mut edges: Vec<usize> = chains.iter().flat_map(Chain::edges).collect();
    edges.sort_unstable();
    edges
}

fuzz_target!(|input: ClusterInput| {
    let n = usize::from(input.node_count % 64) + 1;

    let edges: Vec<(usize, usize)> = input
        .edges
        .iter()
        .take(256)
        .map(|&(a, b)| (usize::from(a) % n, usize::from(b) % n))
        .filter(|(a, b)| a != b)
        .collect();

    let Ok(cluster) = Cluster::from_edges(n, &edges) else {
        return;
    };

    let threshold = if input.parallel { 1 } else { usize::MAX };
    let config = ChainConfig::new()
        .with_parallel_threshold(threshold)
        .with_cover_isolated_cycles(true);
    let (chains, _) = ChainBuilder::with_config(config).build(&cluster);

    let expected: Vec<usize> = (0..cluster.edge_count()).collect();
    assert_eq!(sorted_edges(&chains), expected);

    let split = apply_breakpoints(&chains, &cluster, &input.marks);
    assert_eq!(sorted_edges(&split), expected);
});
