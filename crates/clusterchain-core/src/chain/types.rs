//! The chain entity: one maximal path between branch points.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::cluster::{ClusterView, EdgeIndex, Link, NodeIndex};

/// A maximal simple path through binary nodes, or a whole closed loop.
///
/// A chain starts at its seed node, leaves it across the seed edge, and then
/// records one [`Link`] per hop. The seed node itself never appears in
/// `links`. For a closed loop the final hop back to the seed is kept apart as
/// the closing link.
///
/// Chains are immutable once [`fix_unique_hash`](Self::fix_unique_hash) has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    seed: Link,
    links: Vec<Link>,
    closing_link: Option<Link>,
    is_leaf: bool,
    unique_hash: u64,
    single_edge: Option<EdgeIndex>,
}

impl Chain {
    /// Creates an unhashed chain from its seed, hops and optional closing hop.
    ///
    /// `seed.node` is the start node and `seed.edge` the first edge crossed.
    /// Call [`fix_unique_hash`](Self::fix_unique_hash) before exposing it.
    #[must_use]
    pub fn from_parts(seed: Link, links: Vec<Link>, closing_link: Option<Link>) -> Self {
        Self {
            seed,
            links,
            closing_link,
            is_leaf: false,
            unique_hash: 0,
            single_edge: None,
        }
    }

    /// Finalizes the derived fields: leaf flag, single-edge marker and hash.
    ///
    /// Must run exactly once, after `links` is complete.
    pub fn fix_unique_hash<V: ClusterView + ?Sized>(&mut self, view: &V) {
        let closed = self.is_closed_loop();
        self.is_leaf = !closed
            && !self.links.is_empty()
            && (view.is_leaf(self.seed.node) || view.is_leaf(self.terminal_node()));
        self.single_edge = if !closed && self.links.len() == 1 {
            Some(self.links[0].edge)
        } else {
            None
        };
        self.unique_hash = self.symmetric_hash();
    }

    /// Returns the seed link: start node and first edge crossed.
    #[must_use]
    pub fn seed(&self) -> Link {
        self.seed
    }

    /// Returns the hops after the seed, ending at the terminal node.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns the implicit hop back to the seed of a closed loop.
    #[must_use]
    pub fn closing_link(&self) -> Option<Link> {
        self.closing_link
    }

    /// Returns true if the walk returned to its seed node.
    #[must_use]
    pub fn is_closed_loop(&self) -> bool {
        self.closing_link.is_some()
    }

    /// Returns true if either endpoint is a leaf. Never true for a closed loop.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Returns the direction-independent content hash.
    #[must_use]
    pub fn unique_hash(&self) -> u64 {
        self.unique_hash
    }

    /// Returns the edge of a one-hop open chain, which cannot be split.
    #[must_use]
    pub fn single_edge(&self) -> Option<EdgeIndex> {
        self.single_edge
    }

    /// Returns true if the chain has no hops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the node the walk ends on (the seed node for a closed loop).
    #[must_use]
    pub fn terminal_node(&self) -> NodeIndex {
        self.walk().next_back().map_or(self.seed.node, |link| link.node)
    }

    /// Iterates over every hop including the closing hop of a closed loop.
    pub fn walk(&self) -> impl DoubleEndedIterator<Item = Link> + '_ {
        self.links.iter().copied().chain(self.closing_link)
    }

    /// Returns the number of hops including the closing hop.
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.links.len() + usize::from(self.closing_link.is_some())
    }

    /// Iterates over visited nodes: the seed, then each hop's node.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        std::iter::once(self.seed.node).chain(self.walk().map(|link| link.node))
    }

    /// Iterates over crossed edges in walk order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.walk().map(|link| link.edge)
    }

    /// Node at position `i` of the full node sequence (0 is the seed).
    fn node_at(&self, i: usize) -> NodeIndex {
        if i == 0 {
            self.seed.node
        } else {
            self.hop_at(i - 1).node
        }
    }

    fn hop_at(&self, i: usize) -> Link {
        match self.links.get(i) {
            Some(link) => *link,
            None => self.closing_link.unwrap_or(self.seed),
        }
    }

    /// Hashes the node/edge sequence in both directions and combines the
    /// pair in sorted order, so a path and its reversal hash identically.
    fn symmetric_hash(&self) -> u64 {
        let hops = self.hop_count();

        let mut forward = FxHasher::default();
        self.seed.node.hash(&mut forward);
        for link in self.walk() {
            link.edge.hash(&mut forward);
            link.node.hash(&mut forward);
        }

        let mut backward = FxHasher::default();
        self.node_at(hops).hash(&mut backward);
        for i in (0..hops).rev() {
            self.hop_at(i).edge.hash(&mut backward);
            self.node_at(i).hash(&mut backward);
        }

        let (lo, hi) = {
            let (a, b) = (forward.finish(), backward.finish());
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        };
        let mut combined = FxHasher::default();
        hops.hash(&mut combined);
        lo.hash(&mut combined);
        hi.hash(&mut combined);
        combined.finish()
    }
}
