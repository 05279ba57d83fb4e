//! Arena-indexed in-memory cluster.
//!
//! Nodes and edges are addressed by dense indices, never by pointer, so the
//! undirected adjacency carries no ownership cycles. Every edge is recorded
//! once in each endpoint's link list.

use smallvec::SmallVec;

use crate::error::{Error, Result};

use super::cache::ClusterCache;
use super::types::{EdgeIndex, Link, NodeIndex, NodeRole};
use super::view::ClusterView;

/// Inline link capacity; most nodes in point-derived clusters have degree <= 4.
const INLINE_LINKS: usize = 4;

/// A node in a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterNode {
    index: NodeIndex,
    point_index: usize,
    links: SmallVec<[Link; INLINE_LINKS]>,
}

impl ClusterNode {
    /// Returns the internal node index.
    #[must_use]
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the external point index this node was built from.
    #[must_use]
    pub fn point_index(&self) -> usize {
        self.point_index
    }

    /// Returns the node's links in insertion order.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns the number of links.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.links.len()
    }

    /// Returns the degree-derived role.
    #[must_use]
    pub fn role(&self) -> NodeRole {
        NodeRole::from_degree(self.links.len())
    }
}

/// An undirected edge in a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterEdge {
    index: EdgeIndex,
    start: NodeIndex,
    end: NodeIndex,
}

impl ClusterEdge {
    /// Returns the edge index.
    #[must_use]
    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn start(&self) -> NodeIndex {
        self.start
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn end(&self) -> NodeIndex {
        self.end
    }

    /// Returns the endpoint opposite `node`, or `None` if `node` is not an endpoint.
    #[must_use]
    pub fn other(&self, node: NodeIndex) -> Option<NodeIndex> {
        if node == self.start {
            Some(self.end)
        } else if node == self.end {
            Some(self.start)
        } else {
            None
        }
    }
}

/// In-memory cluster of nodes and undirected edges with an attached cache.
#[derive(Debug, Default)]
pub struct Cluster {
    nodes: Vec<ClusterNode>,
    edges: Vec<ClusterEdge>,
    cache: ClusterCache,
}

impl Cluster {
    /// Creates a new empty cluster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cluster with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(expected_nodes: usize, expected_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(expected_nodes),
            edges: Vec::with_capacity(expected_edges),
            cache: ClusterCache::new(),
        }
    }

    /// Builds a cluster of `node_count` nodes whose point index equals their
    /// node index, connected by the given `(a, b)` pairs in order.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` or `Error::SelfLoop` for an invalid pair.
    pub fn from_edges(node_count: usize, edges: &[(NodeIndex, NodeIndex)]) -> Result<Self> {
        let mut cluster = Self::with_capacity(node_count, edges.len());
        for point in 0..node_count {
            cluster.add_node(point);
        }
        for &(a, b) in edges {
            cluster.add_edge(a, b)?;
        }
        Ok(cluster)
    }

    // ── Node / edge construction ───────────────────────────────────────

    /// Adds an isolated node mapped to `point_index` and returns its index.
    pub fn add_node(&mut self, point_index: usize) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(ClusterNode {
            index,
            point_index,
            links: SmallVec::new(),
        });
        self.cache.clear();
        index
    }

    /// Connects two nodes with a new edge and returns its index.
    ///
    /// Parallel edges are allowed.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if either endpoint does not exist, or
    /// `Error::SelfLoop` if both endpoints are the same node.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) -> Result<EdgeIndex> {
        if a >= self.nodes.len() {
            return Err(Error::NodeNotFound(a));
        }
        if b >= self.nodes.len() {
            return Err(Error::NodeNotFound(b));
        }
        if a == b {
            return Err(Error::SelfLoop(a));
        }

        let index = self.edges.len();
        self.edges.push(ClusterEdge {
            index,
            start: a,
            end: b,
        });
        self.nodes[a].links.push(Link::new(b, index));
        self.nodes[b].links.push(Link::new(a, index));
        self.cache.clear();
        Ok(index)
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Gets a node by index.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> Option<&ClusterNode> {
        self.nodes.get(index)
    }

    /// Gets an edge by index.
    #[must_use]
    pub fn edge(&self, index: EdgeIndex) -> Option<&ClusterEdge> {
        self.edges.get(index)
    }

    /// Returns the endpoints of an edge.
    #[must_use]
    pub fn edge_endpoints(&self, index: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.edges.get(index).map(|e| (e.start, e.end))
    }

    /// Returns all nodes.
    #[must_use]
    pub fn nodes(&self) -> &[ClusterNode] {
        &self.nodes
    }

    /// Returns all edges.
    #[must_use]
    pub fn edges(&self) -> &[ClusterEdge] {
        &self.edges
    }

    /// Returns the number of leaf nodes.
    #[must_use]
    pub fn num_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.role() == NodeRole::Leaf)
            .count()
    }

    /// Returns the number of junction nodes.
    #[must_use]
    pub fn num_junctions(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.role() == NodeRole::Junction)
            .count()
    }

    /// Iterates over junction nodes.
    pub fn iter_junctions(&self) -> impl Iterator<Item = &ClusterNode> {
        self.nodes
            .iter()
            .filter(|n| n.role() == NodeRole::Junction)
    }
}

impl Clone for Cluster {
    /// Clones the topology. The clone starts with an empty cache.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            cache: ClusterCache::new(),
        }
    }
}

impl ClusterView for Cluster {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn links(&self, node: NodeIndex) -> &[Link] {
        &self.nodes[node].links
    }

    fn point_index(&self, node: NodeIndex) -> usize {
        self.nodes[node].point_index
    }

    fn cache(&self) -> &ClusterCache {
        &self.cache
    }
}
