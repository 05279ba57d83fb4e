//! Statistics from a chain build.

use std::time::Duration;

/// Counters collected while building chains for one cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainBuildStats {
    /// Number of seeds walked, including cycle seeds.
    pub seed_count: usize,
    /// Number of chains before deduplication.
    pub raw_chains: usize,
    /// Number of chains after deduplication.
    pub deduplicated_chains: usize,
    /// True when the whole cluster was one all-binary cycle seeded from node 0.
    pub degenerate_cycle: bool,
    /// Number of isolated cycles seeded by the cycle-cover pass.
    pub isolated_cycles: usize,
    /// Whether seeds were walked on the rayon pool.
    pub parallel: bool,
    /// Wall time of the build.
    pub elapsed: Duration,
}

impl ChainBuildStats {
    /// Creates new empty stats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chains removed as duplicates.
    #[must_use]
    pub fn duplicates_removed(&self) -> usize {
        self.raw_chains.saturating_sub(self.deduplicated_chains)
    }
}
