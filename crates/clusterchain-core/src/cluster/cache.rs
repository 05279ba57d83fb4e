//! Keyed, type-erased cache attached to a cluster.
//!
//! Engines store derived data against the cluster that produced it under a
//! fixed string key. Each entry carries a context hash so data that depends on
//! caller-supplied context can be told apart from purely topological data
//! (which always uses a context hash of 0).
//!
//! # Concurrency
//!
//! Reads take a shared lock. No lock is held while a builder runs, so a
//! builder may fan out on rayon and a worker may re-enter the cache from a
//! stolen task. The finished value is inserted under the write lock with a
//! re-check: the first stored value wins, later builders for the same slot
//! drop their result and return the stored one. Every caller therefore sees
//! a single shared value per slot, and never a half-written entry.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// A cached value with the context hash it was built for.
struct CacheEntry {
    context_hash: u64,
    value: Arc<dyn Any + Send + Sync>,
}

/// Keyed cache attached to a cluster.
#[derive(Default)]
pub struct ClusterCache {
    entries: RwLock<FxHashMap<&'static str, CacheEntry>>,
    hits: AtomicU64,
    builds: AtomicU64,
}

impl ClusterCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key` if it exists, was built for
    /// `context_hash`, and has type `T`.
    #[must_use]
    pub fn get<T: Any + Send + Sync>(&self, key: &str, context_hash: u64) -> Option<Arc<T>> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        if entry.context_hash != context_hash {
            return None;
        }
        Arc::clone(&entry.value).downcast::<T>().ok()
    }

    /// Returns the cached value, building and storing it first if absent.
    ///
    /// A builder returning `None` stores nothing and the call returns `None`;
    /// the next call will try to build again. Callers racing on an empty slot
    /// may each run `build`, but only the first finished value is stored and
    /// all of them return it.
    pub fn get_or_build<T, F>(&self, key: &'static str, context_hash: u64, build: F) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Option<T>,
    {
        if let Some(value) = self.get::<T>(key, context_hash) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(key, "cluster cache hit");
            return Some(value);
        }

        let built = Arc::new(build()?);

        let mut entries = self.entries.write();
        if let Some(stored) = entries
            .get(key)
            .filter(|entry| entry.context_hash == context_hash)
            .and_then(|entry| Arc::clone(&entry.value).downcast::<T>().ok())
        {
            tracing::trace!(key, "cluster cache build lost race, keeping stored value");
            return Some(stored);
        }

        let erased: Arc<dyn Any + Send + Sync> = built.clone();
        entries.insert(
            key,
            CacheEntry {
                context_hash,
                value: erased,
            },
        );
        self.builds.fetch_add(1, Ordering::Relaxed);
        Some(built)
    }

    /// Returns true if an entry exists under `key`, whatever its context hash.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Removes the entry under `key`. Returns true if one was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns the number of lookups served from a stored entry.
    #[must_use]
    pub fn hit_count(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Returns the number of built values that were stored.
    #[must_use]
    pub fn build_count(&self) -> u64 {
        self.builds.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for ClusterCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.read();
        let mut keys: Vec<&str> = entries.keys().copied().collect();
        keys.sort_unstable();
        f.debug_struct("ClusterCache")
            .field("keys", &keys)
            .field("hits", &self.hit_count())
            .field("builds", &self.build_count())
            .finish()
    }
}

// Compile-time check: ClusterCache must be Send + Sync
#[allow(dead_code)]
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClusterCache>();
};
