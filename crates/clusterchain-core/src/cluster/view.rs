//! Read-only cluster adjacency consumed by the chain engine.
//!
//! Any node/edge structure can be decomposed into chains by implementing
//! [`ClusterView`]; [`Cluster`](super::Cluster) is the in-memory reference
//! implementation.

use super::cache::ClusterCache;
use super::types::{EdgeIndex, Link, NodeIndex, NodeRole};

/// Trait for read-only cluster adjacency.
///
/// Implementations must be internally consistent: every link must point at an
/// in-range node, and an edge `e` between `a` and `b` must appear once in the
/// link list of each endpoint. The engine does not validate this.
pub trait ClusterView: Sync {
    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns the number of edges. Used for capacity hints only.
    fn edge_count(&self) -> usize;

    /// Returns the links of a node, in insertion order.
    fn links(&self, node: NodeIndex) -> &[Link];

    /// Maps an internal node index to its stable external point index.
    fn point_index(&self, node: NodeIndex) -> usize;

    /// Returns the cache attached to this cluster.
    fn cache(&self) -> &ClusterCache;

    /// Returns the number of links of a node.
    fn degree(&self, node: NodeIndex) -> usize {
        self.links(node).len()
    }

    /// Returns the degree-derived role of a node.
    fn role(&self, node: NodeIndex) -> NodeRole {
        NodeRole::from_degree(self.degree(node))
    }

    /// Returns true if the node is a leaf (degree 1).
    fn is_leaf(&self, node: NodeIndex) -> bool {
        self.role(node).is_leaf()
    }

    /// Returns true if the node is binary (degree 2).
    fn is_binary(&self, node: NodeIndex) -> bool {
        self.role(node).is_binary()
    }

    /// Returns true if the node is isolated (degree 0).
    fn is_empty(&self, node: NodeIndex) -> bool {
        self.role(node).is_empty()
    }

    /// Returns the neighbour reached from `node` across `edge`, if `edge` is incident to it.
    fn neighbor_via(&self, node: NodeIndex, edge: EdgeIndex) -> Option<NodeIndex> {
        self.links(node)
            .iter()
            .find(|link| link.edge == edge)
            .map(|link| link.node)
    }

    /// Returns the link of a binary node that does not cross `arrived_on`.
    fn other_link(&self, node: NodeIndex, arrived_on: EdgeIndex) -> Option<Link> {
        self.links(node)
            .iter()
            .find(|link| link.edge != arrived_on)
            .copied()
    }
}
