//! Leaf-only chain filtering.

use super::set::ChainSet;
use super::types::Chain;

/// Returns a new list holding only chains that touch a leaf.
#[must_use]
pub fn filter_leaves_only(source: &[Chain]) -> Vec<Chain> {
    source.iter().filter(|c| c.is_leaf()).cloned().collect()
}

/// Drops every chain that does not touch a leaf, in place.
pub fn filter_leaves_only_in_place(chains: &mut Vec<Chain>) {
    chains.retain(Chain::is_leaf);
}

impl ChainSet {
    /// Keeps only leaf chains. Copies first if the set is shared with the cache.
    pub fn retain_leaves(&mut self) {
        self.retain(Chain::is_leaf);
    }
}
