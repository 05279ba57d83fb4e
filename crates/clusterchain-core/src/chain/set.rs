//! Shared, copy-on-write chain collections.
//!
//! The cluster cache owns the canonical topology set. Callers receive a
//! [`ChainSet`] that shares the same allocation until they filter it, at
//! which point the set is copied first so the cached data is never mutated.

use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::types::Chain;

/// A reference-counted, copy-on-write list of chains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainSet {
    chains: Arc<Vec<Chain>>,
}

impl ChainSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an owned list of chains.
    #[must_use]
    pub fn from_vec(chains: Vec<Chain>) -> Self {
        Self {
            chains: Arc::new(chains),
        }
    }

    /// Returns the chains as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Chain] {
        &self.chains
    }

    /// Returns true if both sets point at the same allocation.
    #[must_use]
    pub fn shares_storage_with(&self, other: &ChainSet) -> bool {
        Arc::ptr_eq(&self.chains, &other.chains)
    }

    /// Keeps only chains matching `keep`, copying first if the storage is shared.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Chain) -> bool,
    {
        Arc::make_mut(&mut self.chains).retain(keep);
    }

    /// Returns the content hashes in order.
    pub fn hashes(&self) -> impl Iterator<Item = u64> + '_ {
        self.chains.iter().map(Chain::unique_hash)
    }

    /// Unwraps into an owned vector, cloning only if the storage is shared.
    #[must_use]
    pub fn into_vec(self) -> Vec<Chain> {
        Arc::try_unwrap(self.chains).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl Deref for ChainSet {
    type Target = [Chain];

    fn deref(&self) -> &[Chain] {
        &self.chains
    }
}

impl From<Vec<Chain>> for ChainSet {
    fn from(chains: Vec<Chain>) -> Self {
        Self::from_vec(chains)
    }
}

impl FromIterator<Chain> for ChainSet {
    fn from_iter<I: IntoIterator<Item = Chain>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ChainSet {
    type Item = &'a Chain;
    type IntoIter = std::slice::Iter<'a, Chain>;

    fn into_iter(self) -> Self::IntoIter {
        self.chains.iter()
    }
}
