// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Depth-first decomposition of a network into depth-ordered reaches.
//!
//! This is the scheduling kernel: a depth-first walk of a graph (typically the *reversed*
//! collapsed network, so that "downstream" in the walked graph is "upstream" in the physical
//! river) that emits maximal chains of nodes ("reaches") between structural breaks, each tagged
//! with a depth suitable for grouping into a parallel execution schedule.

use crate::graph::Network;
use crate::NodeId;
use indexmap::{IndexMap, IndexSet};

/// A non-empty, ordered chain of nodes. The first element is the "upstream-most" endpoint: for
/// every consecutive pair `(a, b)`, `a` is a predecessor of `b` in the walked (reversed) graph.
pub type Reach = Vec<NodeId>;

/// Returns a break predicate that opens a new reach at any node with more than one child in
/// `network` (i.e. continues the current reach only while the candidate has exactly one child).
///
/// Extending a reach into a node with exactly one downstream neighbor never introduces a
/// junction; any other node count calls for a break.
pub fn split_at_junction(network: &Network) -> impl Fn(Option<&[NodeId]>, NodeId) -> bool + '_ {
    move |_path, node| network.children(node).len() == 1
}

/// Returns a break predicate that treats waterbody boundaries as an additional break, on top of
/// [`split_at_junction`]'s rule.
///
/// If the most recently added node of the accumulated path belongs to a waterbody, the reach
/// continues only into another node that also belongs to (any) waterbody. Otherwise the plain
/// junction rule applies.
pub fn split_at_waterbodies_and_junctions<'a>(
    waterbody_nodes: &'a IndexMap<NodeId, NodeId>,
    network: &'a Network,
) -> impl Fn(Option<&[NodeId]>, NodeId) -> bool + 'a {
    move |path, node| match path.and_then(|p| p.last()) {
        Some(last) if waterbody_nodes.contains_key(last) => waterbody_nodes.contains_key(&node),
        _ => network.children(node).len() == 1,
    }
}

/// Decomposes `network` into depth-tagged reaches.
///
/// `should_continue(path, candidate)` decides whether `candidate` may be appended to the
/// in-progress reach described by `path` (`path` is `None` only for the depth-bump check against
/// the node currently at the top of the walk stack, before any reach has been started around
/// it). `sources` defaults to [`crate::graph::headwaters`] of `network` when `None`.
///
/// Depth may be negative: the counter is incremented whenever a break is opened and decremented
/// on every reach emission, without being re-anchored. Callers that need a non-negative schedule
/// index should shift all depths so the minimum becomes 0 — this crate does not do so itself,
/// since the emission order (not the raw depth value) is what callers must rely on for
/// correctness.
pub fn dfs_decomposition_depth_tuple(
    network: &Network,
    should_continue: impl Fn(Option<&[NodeId]>, NodeId) -> bool,
    sources: Option<&[NodeId]>,
) -> Vec<(i64, Reach)> {
    let owned_headwaters;
    let sources: &[NodeId] = match sources {
        Some(s) => s,
        None => {
            owned_headwaters = crate::graph::headwaters(network);
            &owned_headwaters
        }
    };

    let mut path_tuples: Vec<(i64, Reach)> = Vec::new();
    let mut reach_seq_order: i64 = 0;
    let mut visited: IndexSet<NodeId> = IndexSet::new();
    let mut junctions: IndexSet<NodeId> = IndexSet::new();

    for &h in sources {
        // Each stack frame is (node, index of the next not-yet-taken child).
        let mut stack: Vec<(NodeId, usize)> = vec![(h, 0)];
        while let Some(&(node, child_idx)) = stack.last() {
            if !should_continue(None, node) && !junctions.contains(&node) {
                reach_seq_order += 1;
                junctions.insert(node);
            }

            let children = network.children(node);
            if let Some(&child) = children.get(child_idx) {
                stack.last_mut().unwrap().1 += 1;
                if visited.insert(child) && network.is_known(child) {
                    stack.push((child, 0));
                }
                continue;
            }

            // Children exhausted: pop this node and emit its reach.
            let (node, _) = stack.pop().unwrap();
            let mut path = vec![node];
            for &(ancestor, _) in stack.iter().rev() {
                if should_continue(Some(&path), ancestor) {
                    path.push(ancestor);
                } else {
                    break;
                }
            }
            reach_seq_order -= 1;
            let fused = path.len() - 1;
            path_tuples.push((reach_seq_order, path));
            if fused > 0 {
                let new_len = stack.len() - fused;
                stack.truncate(new_len);
            }
        }
    }

    path_tuples
}

/// The plain, un-depthed variant of [`dfs_decomposition_depth_tuple`]: emits the same reaches,
/// in the same order, without tracking depth.
pub fn dfs_decomposition(
    network: &Network,
    should_continue: impl Fn(Option<&[NodeId]>, NodeId) -> bool,
    sources: Option<&[NodeId]>,
) -> Vec<Reach> {
    let owned_headwaters;
    let sources: &[NodeId] = match sources {
        Some(s) => s,
        None => {
            owned_headwaters = crate::graph::headwaters(network);
            &owned_headwaters
        }
    };

    let mut paths: Vec<Reach> = Vec::new();
    let mut visited: IndexSet<NodeId> = IndexSet::new();

    for &h in sources {
        let mut stack: Vec<(NodeId, usize)> = vec![(h, 0)];
        while let Some(&(node, child_idx)) = stack.last() {
            let children = network.children(node);
            if let Some(&child) = children.get(child_idx) {
                stack.last_mut().unwrap().1 += 1;
                if visited.insert(child) && network.is_known(child) {
                    stack.push((child, 0));
                }
                continue;
            }

            let (node, _) = stack.pop().unwrap();
            let mut path = vec![node];
            for &(ancestor, _) in stack.iter().rev() {
                if should_continue(Some(&path), ancestor) {
                    path.push(ancestor);
                } else {
                    break;
                }
            }
            let fused = path.len() - 1;
            paths.push(path);
            if fused > 0 {
                let new_len = stack.len() - fused;
                stack.truncate(new_len);
            }
        }
    }

    paths
}

/// Groups `(depth, reach)` pairs into a mapping from depth to the list of reaches at that depth,
/// preserving emission order within each bucket.
pub fn tuple_with_orders_into_dict(pairs: Vec<(i64, Reach)>) -> IndexMap<i64, Vec<Reach>> {
    let mut grouped: IndexMap<i64, Vec<Reach>> = IndexMap::new();
    for (depth, reach) in pairs {
        grouped.entry(depth).or_default().push(reach);
    }
    grouped
}

/// Builds the dependency graph between emitted reaches: for each reach, the index of the reach
/// that contains its downstream node, if any.
///
/// `network` is the *forward* (un-reversed) network the reaches were decomposed from — not the
/// reversed network that was walked to produce them. Each reach's last element is its
/// downstream-most member; if that node has a downstream child in `network`, and that child is
/// itself the upstream-most (first) element of some other reach, this records a dependency from
/// the first reach onto the second one's index. A reach with no downstream child, or whose
/// downstream child is not the head of any reach (should not happen for a decomposition produced
/// over `network`'s own reversal), has no entry.
///
/// The returned map is keyed by reach index in `reaches`, with dependency indices in the order
/// they were discovered — at most one per reach, since only the first downstream child is
/// consulted.
pub fn segment_deps(reaches: &[Reach], network: &Network) -> IndexMap<usize, Vec<usize>> {
    let head_index: IndexMap<NodeId, usize> = reaches
        .iter()
        .enumerate()
        .filter_map(|(i, reach)| reach.first().map(|&head| (head, i)))
        .collect();

    let mut deps: IndexMap<usize, Vec<usize>> = IndexMap::new();
    for (i, reach) in reaches.iter().enumerate() {
        if let Some(&tail) = reach.last() {
            if let Some(&downstream) = network.children(tail).first() {
                if let Some(&j) = head_index.get(&downstream) {
                    deps.entry(i).or_default().push(j);
                }
            }
        }
    }
    deps
}
