// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::Network;
use crate::{Error, NodeId};
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use std::collections::VecDeque;

/// Returns the headwaters of `network`: nodes that are keys of the network but appear in no
/// downstream list (physical river origins).
pub fn headwaters(network: &Network) -> Vec<NodeId> {
    let targets: IndexSet<NodeId> = network.edges().map(|(_, dst)| dst).collect();
    network
        .nodes()
        .filter(|n| network.is_known(*n) && !targets.contains(n))
        .collect()
}

/// Returns the tailwaters of `network`: nodes that appear in a downstream list but are not keys
/// of the network, plus keys whose downstream list is empty (physical river outlets).
pub fn tailwaters(network: &Network) -> Vec<NodeId> {
    let implicit_sinks = network
        .edges()
        .map(|(_, dst)| dst)
        .filter(|n| !network.is_known(*n))
        .unique();
    let empty_keys = network
        .nodes()
        .filter(|n| network.is_known(*n) && network.children(*n).is_empty());
    implicit_sinks.chain(empty_keys).collect()
}

/// Returns the junctions of `network`: nodes that appear as a downstream target of more than one
/// parent.
pub fn junctions(network: &Network) -> Vec<NodeId> {
    let mut counts: IndexMap<NodeId, usize> = IndexMap::new();
    for (_, dst) in network.edges() {
        *counts.entry(dst).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(node, _)| node)
        .collect()
}

/// Computes, for each source, the set of nodes reachable from it by following downstream edges.
///
/// If `targets` is supplied, reaching a target halts expansion *from that node*: the target is
/// included in the reached set, but its own children are not explored. If `sources` is omitted,
/// [`headwaters`] is used.
pub fn reachable(
    network: &Network,
    sources: Option<&[NodeId]>,
    targets: Option<&[NodeId]>,
) -> IndexMap<NodeId, IndexSet<NodeId>> {
    let owned_headwaters;
    let sources: &[NodeId] = match sources {
        Some(s) => s,
        None => {
            owned_headwaters = headwaters(network);
            &owned_headwaters
        }
    };
    let targets: Option<IndexSet<NodeId>> = targets.map(|t| t.iter().copied().collect());

    let mut result = IndexMap::new();
    for &h in sources {
        let mut reach: IndexSet<NodeId> = IndexSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        queue.push_back(h);
        while let Some(x) = queue.pop_front() {
            if !reach.insert(x) {
                continue;
            }
            let should_expand = match &targets {
                Some(targets) => !targets.contains(&x),
                None => true,
            };
            if should_expand {
                queue.extend(network.children(x).iter().copied());
            }
        }
        result.insert(h, reach);
    }
    result
}

/// Computes the reachable subnetwork for each source: [`reachable`], restricted to downstream
/// lists that preserve `network`'s own neighbor ordering.
///
/// When `check_disjoint` is true, fails with [`Error::GraphInvariantViolation`] if any two
/// sources reach a common node.
pub fn reachable_network(
    network: &Network,
    sources: Option<&[NodeId]>,
    targets: Option<&[NodeId]>,
    check_disjoint: bool,
) -> Result<IndexMap<NodeId, Network>, Error> {
    let reached = reachable(network, sources, targets);

    if check_disjoint {
        for (a, b) in reached.keys().tuple_combinations() {
            let reach_a = &reached[a];
            let reach_b = &reached[b];
            if reach_a.intersection(reach_b).next().is_some() {
                return Err(Error::GraphInvariantViolation(format!(
                    "sources {} and {} have overlapping reachable sets",
                    a, b
                )));
            }
        }
    }

    // Note: children are copied verbatim from `network`, not filtered to the reached set. A
    // target node halts expansion, so its real downstream neighbors never enter `reach` — but
    // its original children list is still attached here, matching how the reference
    // implementation builds these subgraphs.
    Ok(reached
        .into_iter()
        .map(|(source, reach)| {
            let mut subnetwork = Network::new();
            for &n in &reach {
                subnetwork.ensure_present(n);
                for &child in network.children(n) {
                    subnetwork.push_edge(n, child);
                }
            }
            (source, subnetwork)
        })
        .collect())
}
