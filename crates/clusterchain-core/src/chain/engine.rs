//! Cached chain access for callers.
//!
//! [`ChainEngine`] builds topology chains once per cluster, stores them in the
//! cluster's cache and derives breakpoint-split or leaf-only views from the
//! cached set on demand.

use crate::cluster::ClusterView;
use crate::config::{ChainConfig, ThreadConfig};
use crate::error::Result;

use super::breakpoints::apply_breakpoints;
use super::builder::ChainBuilder;
use super::set::ChainSet;
use super::stats::ChainBuildStats;
use super::types::Chain;

/// Cache key under which topology chains are stored on a cluster.
pub const CHAIN_CACHE_KEY: &str = "clusterchain.topology_chains";

/// Context hash of the topology chain entry. Chains depend on topology only.
pub const CHAIN_CONTEXT_HASH: u64 = 0;

/// Options for a chain request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainRequest<'a> {
    /// One marker per external point index; `None` or empty means no breakpoints.
    pub breakpoints: Option<&'a [bool]>,
    /// Keep only chains touching a leaf.
    pub leaves_only: bool,
}

impl<'a> ChainRequest<'a> {
    /// Creates a request for the unfiltered topology chains.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: split at the given breakpoint markers.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: &'a [bool]) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    /// Builder: keep only leaf chains.
    #[must_use]
    pub fn leaves_only(mut self, leaves_only: bool) -> Self {
        self.leaves_only = leaves_only;
        self
    }
}

/// Chain engine: builder, optional dedicated pool, and cache access.
#[derive(Debug)]
pub struct ChainEngine {
    builder: ChainBuilder,
    pool: Option<rayon::ThreadPool>,
}

impl Default for ChainEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainEngine {
    /// Creates an engine with default config on the global rayon pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: ChainBuilder::new(),
            pool: None,
        }
    }

    /// Creates an engine with the given config.
    ///
    /// `ThreadConfig::Fixed` builds a dedicated pool owned by the engine. If
    /// the pool cannot be created the engine falls back to the global pool.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the config fails validation.
    pub fn with_config(config: ChainConfig) -> Result<Self> {
        config.validate()?;
        let pool = match config.threads {
            ThreadConfig::Auto => None,
            ThreadConfig::Fixed(threads) => match build_pool(threads) {
                Ok(pool) => Some(pool),
                Err(err) => {
                    tracing::warn!(error = %err, threads, "Falling back to global rayon pool");
                    None
                }
            },
        };
        Ok(Self {
            builder: ChainBuilder::with_config(config),
            pool,
        })
    }

    /// Returns the engine's config.
    #[must_use]
    pub fn config(&self) -> &ChainConfig {
        self.builder.config()
    }

    /// Returns true if the engine owns a dedicated worker pool.
    #[must_use]
    pub fn has_dedicated_pool(&self) -> bool {
        self.pool.is_some()
    }

    /// Builds chains without touching the cache.
    pub fn build_chains<V: ClusterView + ?Sized>(&self, view: &V) -> (Vec<Chain>, ChainBuildStats) {
        match &self.pool {
            Some(pool) => pool.install(|| self.builder.build(view)),
            None => self.builder.build(view),
        }
    }

    /// Returns the cached topology chains, building and caching them first if needed.
    ///
    /// Returns `None` for a cluster that yields no chains; nothing is cached then.
    pub fn build_and_cache_chains<V: ClusterView + ?Sized>(&self, view: &V) -> Option<ChainSet> {
        view.cache()
            .get_or_build(CHAIN_CACHE_KEY, CHAIN_CONTEXT_HASH, || {
                let (chains, _stats) = self.build_chains(view);
                if chains.is_empty() {
                    None
                } else {
                    Some(ChainSet::from_vec(chains))
                }
            })
            .map(|cached| ChainSet::clone(&cached))
    }

    /// Returns the cached topology chains without building.
    #[must_use]
    pub fn cached_chains<V: ClusterView + ?Sized>(&self, view: &V) -> Option<ChainSet> {
        view.cache()
            .get::<ChainSet>(CHAIN_CACHE_KEY, CHAIN_CONTEXT_HASH)
            .map(|cached| ChainSet::clone(&cached))
    }

    /// Returns chains for `view`, optionally split at breakpoints and
    /// narrowed to leaf chains, with a success flag.
    ///
    /// Without breakpoints or leaf filtering the returned set shares storage
    /// with the cache. Success is false when the result is empty.
    pub fn get_or_build_chains<V: ClusterView + ?Sized>(
        &self,
        view: &V,
        breakpoints: Option<&[bool]>,
        leaves_only: bool,
    ) -> (ChainSet, bool) {
        let Some(cached) = self.build_and_cache_chains(view) else {
            return (ChainSet::new(), false);
        };

        let mut chains = match breakpoints {
            Some(markers) if !markers.is_empty() => {
                ChainSet::from_vec(apply_breakpoints(&cached, view, markers))
            }
            _ => cached,
        };

        if leaves_only {
            chains.retain_leaves();
        }

        let success = !chains.is_empty();
        (chains, success)
    }

    /// Runs a [`ChainRequest`].
    pub fn request<V: ClusterView + ?Sized>(
        &self,
        view: &V,
        request: &ChainRequest<'_>,
    ) -> (ChainSet, bool) {
        self.get_or_build_chains(view, request.breakpoints, request.leaves_only)
    }
}

fn build_pool(threads: usize) -> Result<rayon::ThreadPool> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("clusterchain-{i}"))
        .build()?)
}
