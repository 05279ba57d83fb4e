//! Chain construction: seed selection, parallel walks and deduplication.
//!
//! Seeds are chosen from node roles:
//! - every leaf seeds one chain across its only edge;
//! - every junction seeds one chain per link whose neighbour is not a leaf
//!   (leaf-to-junction paths are already seeded from the leaf);
//! - binary nodes never seed, they are only walked through.
//!
//! A cluster made only of binary nodes has no natural seed, so node 0 seeds
//! the single cycle. Each seed is walked independently, so walks fan out over
//! rayon once the seed count reaches the configured threshold. Deduplication
//! runs after all walks have joined.

use std::time::Instant;

use rayon::prelude::*;

use crate::cluster::{ClusterView, Link, NodeRole};
use crate::config::ChainConfig;

use super::dedup::dedup_chains;
use super::stats::ChainBuildStats;
use super::types::Chain;

/// Builds topology chains for a cluster.
#[derive(Debug, Clone, Default)]
pub struct ChainBuilder {
    config: ChainConfig,
}

impl ChainBuilder {
    /// Creates a builder with default config.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ChainConfig::default(),
        }
    }

    /// Creates a builder with the given config.
    #[must_use]
    pub fn with_config(config: ChainConfig) -> Self {
        Self { config }
    }

    /// Returns the builder's config.
    #[must_use]
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Builds the deduplicated chain list for `view`.
    ///
    /// Parallel walks run on whichever rayon pool is current; wrap the call in
    /// `ThreadPool::install` to pin it to a dedicated pool.
    pub fn build<V: ClusterView + ?Sized>(&self, view: &V) -> (Vec<Chain>, ChainBuildStats) {
        let started = Instant::now();
        let mut stats = ChainBuildStats::new();

        let mut seeds = collect_seeds(view);
        if seeds.is_empty() && !self.config.cover_isolated_cycles && is_single_cycle(view) {
            if let Some(first) = view.links(0).first() {
                seeds.push(Link::new(0, first.edge));
                stats.degenerate_cycle = true;
            }
        }
        stats.seed_count = seeds.len();

        let mut chains: Vec<Chain> = if self.config.should_parallelize(seeds.len()) {
            stats.parallel = true;
            seeds.par_iter().map(|&seed| walk_chain(view, seed)).collect()
        } else {
            seeds.iter().map(|&seed| walk_chain(view, seed)).collect()
        };

        if self.config.cover_isolated_cycles {
            let cycles = walk_isolated_cycles(view, &chains);
            stats.isolated_cycles = cycles.len();
            stats.seed_count += cycles.len();
            chains.extend(cycles);
        }

        stats.raw_chains = chains.len();
        let chains = dedup_chains(chains);
        stats.deduplicated_chains = chains.len();
        stats.elapsed = started.elapsed();

        tracing::debug!(
            nodes = view.node_count(),
            edges = view.edge_count(),
            seeds = stats.seed_count,
            raw = stats.raw_chains,
            chains = stats.deduplicated_chains,
            degenerate_cycle = stats.degenerate_cycle,
            isolated_cycles = stats.isolated_cycles,
            parallel = stats.parallel,
            elapsed_us = u64::try_from(stats.elapsed.as_micros()).unwrap_or(u64::MAX),
            "Built cluster chains"
        );

        (chains, stats)
    }
}

/// Collects role-derived seeds in node index order.
#[must_use]
pub fn collect_seeds<V: ClusterView + ?Sized>(view: &V) -> Vec<Link> {
    let mut seeds = Vec::with_capacity(view.node_count());
    for node in 0..view.node_count() {
        match view.role(node) {
            NodeRole::Empty | NodeRole::Binary => {}
            NodeRole::Leaf => {
                let link = view.links(node)[0];
                seeds.push(Link::new(node, link.edge));
            }
            NodeRole::Junction => {
                seeds.extend(
                    view.links(node)
                        .iter()
                        .filter(|link| !view.is_leaf(link.node))
                        .map(|link| Link::new(node, link.edge)),
                );
            }
        }
    }
    seeds
}

/// Walks from `seed` through binary nodes until a non-binary node is reached
/// or the walk returns to the seed node, and returns the hashed chain.
///
/// `seed.node` is the start node and `seed.edge` the first edge to cross.
#[must_use]
pub fn walk_chain<V: ClusterView + ?Sized>(view: &V, seed: Link) -> Chain {
    let mut links = Vec::new();
    let mut closing_link = None;

    if let Some(first) = view.neighbor_via(seed.node, seed.edge) {
        let mut hop = Link::new(first, seed.edge);
        // A walk visits each node at most once before it stops or closes.
        let max_hops = view.node_count();
        loop {
            if hop.node == seed.node {
                closing_link = Some(hop);
                break;
            }
            links.push(hop);
            if !view.is_binary(hop.node) || links.len() >= max_hops {
                break;
            }
            match view.other_link(hop.node, hop.edge) {
                Some(next) => hop = next,
                None => break,
            }
        }
    }

    let mut chain = Chain::from_parts(seed, links, closing_link);
    chain.fix_unique_hash(view);
    chain
}

/// Returns true if the cluster is non-empty and every node is binary.
fn is_single_cycle<V: ClusterView + ?Sized>(view: &V) -> bool {
    view.node_count() > 0 && (0..view.node_count()).all(|node| view.is_binary(node))
}

/// Seeds and walks every all-binary cycle that no existing chain reaches,
/// lowest node index first.
fn walk_isolated_cycles<V: ClusterView + ?Sized>(view: &V, chains: &[Chain]) -> Vec<Chain> {
    let mut visited = vec![false; view.node_count()];
    for chain in chains {
        mark_visited(&mut visited, chain);
    }

    let mut cycles = Vec::new();
    for node in 0..view.node_count() {
        if visited[node] || !view.is_binary(node) {
            continue;
        }
        let Some(first) = view.links(node).first() else {
            continue;
        };
        let chain = walk_chain(view, Link::new(node, first.edge));
        mark_visited(&mut visited, &chain);
        cycles.push(chain);
    }
    cycles
}

fn mark_visited(visited: &mut [bool], chain: &Chain) {
    for node in chain.nodes() {
        visited[node] = true;
    }
}
