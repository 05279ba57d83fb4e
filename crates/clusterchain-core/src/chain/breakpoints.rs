//! Re-segmenting cached chains at caller-marked breakpoints.
//!
//! Breakpoints are given as one boolean per external point index. A chain is
//! cut after every hop that lands on a marked point; the cut point ends one
//! segment and seeds the next. One-hop chains are never split.
//!
//! Closed loops need care: their seed is wherever the walk happened to start,
//! not a real boundary. When the seed of an all-binary loop is unmarked but
//! some other point is marked, the segment running into the seed and the
//! segment running out of it are joined back into one chain.

use crate::cluster::{ClusterView, Link, NodeIndex};

use super::dedup::dedup_chains;
use super::types::Chain;

/// Splits `source` chains at marked points and returns the deduplicated result.
///
/// Point indices beyond the end of `breakpoints` count as unmarked. The source
/// chains are not modified.
#[must_use]
pub fn apply_breakpoints<V: ClusterView + ?Sized>(
    source: &[Chain],
    view: &V,
    breakpoints: &[bool],
) -> Vec<Chain> {
    let is_marked = |node: NodeIndex| {
        breakpoints
            .get(view.point_index(node))
            .copied()
            .unwrap_or(false)
    };

    let mut output = Vec::with_capacity(source.len());
    for chain in source {
        split_chain(chain, view, &is_marked, &mut output);
    }

    let raw = output.len();
    let output = dedup_chains(output);
    tracing::debug!(
        source = source.len(),
        raw,
        chains = output.len(),
        "Applied chain breakpoints"
    );
    output
}

/// Splits one chain, appending the resulting segments to `output`.
fn split_chain<V, F>(chain: &Chain, view: &V, is_marked: &F, output: &mut Vec<Chain>)
where
    V: ClusterView + ?Sized,
    F: Fn(NodeIndex) -> bool,
{
    if chain.single_edge().is_some() {
        output.push(chain.clone());
        return;
    }

    let seed = chain.seed();
    let walk: Vec<Link> = chain.walk().collect();
    let first_segment = output.len();
    let mut any_cut = false;

    let mut segment_seed = seed;
    let mut segment: Vec<Link> = Vec::new();

    for (i, &link) in walk.iter().enumerate() {
        segment.push(link);
        if !is_marked(link.node) {
            continue;
        }

        output.push(finish_segment(view, segment_seed, std::mem::take(&mut segment)));
        any_cut = true;

        let next_edge = walk.get(i + 1).map_or(link.edge, |next| next.edge);
        segment_seed = Link::new(link.node, next_edge);
    }

    if !chain.is_closed_loop() {
        if !segment.is_empty() {
            output.push(finish_segment(view, segment_seed, segment));
        }
        return;
    }

    if !any_cut {
        output.push(chain.clone());
        return;
    }

    // A marked seed ends the last segment on the closing hop.
    if segment.is_empty() {
        return;
    }

    if !is_marked(seed.node) && view.is_binary(seed.node) {
        // The tail runs into the arbitrary loop seed and the first segment
        // runs out of it: rejoin them across the seed.
        segment.extend_from_slice(output[first_segment].links());
        output[first_segment] = finish_segment(view, segment_seed, segment);
    } else {
        output.push(finish_segment(view, segment_seed, segment));
    }
}

/// Builds an open, hashed chain from a finished segment.
fn finish_segment<V: ClusterView + ?Sized>(view: &V, seed: Link, links: Vec<Link>) -> Chain {
    let mut chain = Chain::from_parts(seed, links, None);
    chain.fix_unique_hash(view);
    chain
}
