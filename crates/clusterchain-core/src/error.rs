//! Error types for clusterchain.
//!
//! Graph-shape conditions (empty clusters, missing breakpoints, degenerate
//! chains) are never errors: the engine reports them through an empty
//! [`ChainSet`](crate::chain::ChainSet) and a `false` success flag. The
//! variants below cover cluster construction and engine configuration only.

use thiserror::Error;

/// Errors raised while building clusters or configuring the chain engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge endpoint refers to a node index that does not exist.
    #[error("Node {0} not found in cluster")]
    NodeNotFound(usize),

    /// An edge would connect a node to itself.
    #[error("Edge would create a self-loop on node {0}")]
    SelfLoop(usize),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A dedicated worker pool could not be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err.to_string())
    }
}

/// Result type alias for clusterchain operations.
pub type Result<T> = std::result::Result<T, Error>;
