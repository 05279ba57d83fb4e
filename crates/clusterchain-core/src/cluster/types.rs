//! Index and link types shared by clusters and chains.

use serde::{Deserialize, Serialize};

/// Internal node index within a cluster's arena.
pub type NodeIndex = usize;

/// Internal edge index within a cluster's arena.
pub type EdgeIndex = usize;

/// A directed hop across a specific edge to a specific neighbouring node.
///
/// The edge index is part of the identity: two nodes may be joined by
/// parallel edges, and a walk must know which one it arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Node reached by this hop.
    pub node: NodeIndex,
    /// Edge crossed by this hop.
    pub edge: EdgeIndex,
}

impl Link {
    /// Creates a new link.
    #[must_use]
    pub const fn new(node: NodeIndex, edge: EdgeIndex) -> Self {
        Self { node, edge }
    }
}

/// Role of a node, derived purely from its degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    /// Degree 0: isolated, never part of a chain.
    Empty,
    /// Degree 1: a chain endpoint.
    Leaf,
    /// Degree 2: a pass-through node inside a chain.
    Binary,
    /// Degree 3 or more: a branch point bounding chains.
    Junction,
}

impl NodeRole {
    /// Classifies a node by its number of links.
    #[must_use]
    pub const fn from_degree(degree: usize) -> Self {
        match degree {
            0 => Self::Empty,
            1 => Self::Leaf,
            2 => Self::Binary,
            _ => Self::Junction,
        }
    }

    /// Returns true for degree-1 nodes.
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Returns true for degree-2 nodes.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Binary)
    }

    /// Returns true for degree-0 nodes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true for nodes of degree 3 or more.
    #[must_use]
    pub const fn is_junction(self) -> bool {
        matches!(self, Self::Junction)
    }
}
