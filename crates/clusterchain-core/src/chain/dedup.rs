//! Hash-based chain deduplication.

use rustc_hash::FxHashSet;

use super::types::Chain;

/// Removes chains whose content hash was already seen, keeping the first
/// occurrence and the original order. Chains without hops are dropped.
///
/// Hash equality is treated as path identity. With a 64-bit hash a collision
/// between distinct paths is possible in principle and would drop one of them.
#[must_use]
pub fn dedup_chains(chains: Vec<Chain>) -> Vec<Chain> {
    let mut seen = FxHashSet::with_capacity_and_hasher(chains.len(), Default::default());
    chains
        .into_iter()
        .filter(|chain| !chain.is_empty() && seen.insert(chain.unique_hash()))
        .collect()
}
