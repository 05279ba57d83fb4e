//! Chain engine configuration.
//!
//! Configuration is layered with figment: built-in defaults, then an optional
//! TOML file, then `CLUSTERCHAIN_`-prefixed environment variables.
//!
//! ```toml
//! parallel_threshold = 128
//! cover_isolated_cycles = true
//! threads = { fixed = 4 }
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable prefix recognised by [`ChainConfig::load`].
pub const ENV_PREFIX: &str = "CLUSTERCHAIN_";

/// Default number of seeds at which chain walks move onto the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Thread configuration for parallel chain walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadConfig {
    /// Use the global rayon pool.
    #[default]
    Auto,
    /// Use a dedicated pool with a fixed number of threads.
    Fixed(usize),
}

impl ThreadConfig {
    /// Returns the effective number of threads to use.
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        match self {
            ThreadConfig::Auto => rayon::current_num_threads().max(1),
            ThreadConfig::Fixed(n) => *n,
        }
    }
}

/// Configuration for chain building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Minimum number of seeds to walk chains in parallel.
    pub parallel_threshold: usize,
    /// Thread configuration (auto or fixed).
    pub threads: ThreadConfig,
    /// Seed every unreached all-binary cycle, not only the whole-graph cycle.
    pub cover_isolated_cycles: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            threads: ThreadConfig::Auto,
            cover_isolated_cycles: false,
        }
    }
}

impl ChainConfig {
    /// Creates a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set parallel threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Builder: set thread config.
    #[must_use]
    pub fn with_threads(mut self, threads: ThreadConfig) -> Self {
        self.threads = threads;
        self
    }

    /// Builder: set fixed thread count.
    #[must_use]
    pub fn with_fixed_threads(mut self, count: usize) -> Self {
        self.threads = ThreadConfig::Fixed(count);
        self
    }

    /// Builder: seed isolated cycles anywhere in the cluster.
    #[must_use]
    pub fn with_cover_isolated_cycles(mut self, enabled: bool) -> Self {
        self.cover_isolated_cycles = enabled;
        self
    }

    /// Determines if chain walks should run in parallel for this many seeds.
    #[must_use]
    pub fn should_parallelize(&self, seed_count: usize) -> bool {
        seed_count >= self.parallel_threshold
    }

    /// Loads configuration from defaults, an optional TOML file and the environment.
    ///
    /// A missing file is not an error; figment simply skips it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML string layered over the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.threads == ThreadConfig::Fixed(0) {
            return Err(Error::Config(
                "threads.fixed must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
