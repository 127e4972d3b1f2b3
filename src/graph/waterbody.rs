// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Waterbody (reservoir/lake) overlays: collapsing a set of nodes that share a waterbody into a
//! single synthetic node identified by its [`WaterbodyId`].

use crate::graph::Network;
use crate::{NodeId, WaterbodyId};
use indexmap::{IndexMap, IndexSet};

/// Returns the "shore" of a waterbody: the union of downstream children of `waterbody_nodes`,
/// excluding any child that is itself a member of the same set.
///
/// Uses an insertion-ordered set internally so the result is deterministic across runs given
/// identical input, even though set union has no inherent order.
pub fn reservoir_shore(network: &Network, waterbody_nodes: &[NodeId]) -> Vec<NodeId> {
    let in_body: IndexSet<NodeId> = waterbody_nodes.iter().copied().collect();
    let mut shore: IndexSet<NodeId> = IndexSet::new();
    for &node in waterbody_nodes {
        for &child in network.children(node) {
            if !in_body.contains(&child) {
                shore.insert(child);
            }
        }
    }
    shore.into_iter().collect()
}

/// Returns true iff `n` is not itself in a waterbody, is a known node of `network`, and at least
/// one of its children belongs to a waterbody (i.e. `n` sits on a waterbody's boundary).
pub fn reservoir_boundary(
    network: &Network,
    waterbodies: &IndexMap<NodeId, WaterbodyId>,
    n: NodeId,
) -> bool {
    !waterbodies.contains_key(&n)
        && network.is_known(n)
        && network
            .children(n)
            .iter()
            .any(|child| waterbodies.contains_key(child))
}

/// Splits `network` into one subgraph per waterbody, each restricted to the waterbody's own
/// member nodes with downstream lists filtered to in-waterbody targets only.
pub fn separate_waterbodies(
    network: &Network,
    waterbodies: &IndexMap<NodeId, WaterbodyId>,
) -> IndexMap<WaterbodyId, Network> {
    let members = crate::graph::reverse_surjective_mapping(waterbodies);
    let mut result = IndexMap::new();
    for (wb, nodes) in members {
        let mut sub = Network::new();
        for n in nodes {
            if network.is_known(n) {
                sub.ensure_present(n);
                for &child in network.children(n) {
                    if waterbodies.contains_key(&child) {
                        sub.push_edge(n, child);
                    }
                }
            }
        }
        result.insert(wb, sub);
    }
    result
}

/// Collapses every waterbody in `waterbodies` into a single synthetic node identified by its
/// [`WaterbodyId`], returning a new network. `network` is left unmodified.
///
/// For each node n of `network`, in key order:
/// 1. If `n` belongs to a waterbody whose code has not yet been emitted, emit
///    `code -> reservoir_shore(waterbody members)`. A code already emitted is skipped.
/// 2. Otherwise, if `n` is a [`reservoir_boundary`], emit `n` with its children, substituting any
///    in-waterbody child with its `WaterbodyId`.
/// 3. Otherwise, copy `n -> children` unchanged.
pub fn collapse_waterbodies(
    network: &Network,
    waterbodies: &IndexMap<NodeId, WaterbodyId>,
) -> Network {
    let mut collapsed = Network::new();

    for n in network.keys() {
        if let Some(&code) = waterbodies.get(&n) {
            if collapsed.is_known(code) {
                continue;
            }
            let members: Vec<NodeId> = waterbodies
                .iter()
                .filter(|&(_, &c)| c == code)
                .map(|(&k, _)| k)
                .collect();
            let shore = reservoir_shore(network, &members);
            collapsed.ensure_present(code);
            for child in shore {
                collapsed.push_edge(code, child);
            }
        } else if reservoir_boundary(network, waterbodies, n) {
            collapsed.ensure_present(n);
            for &child in network.children(n) {
                let substituted = waterbodies.get(&child).copied().unwrap_or(child);
                collapsed.push_edge(n, substituted);
            }
        } else {
            collapsed.ensure_present(n);
            for &child in network.children(n) {
                collapsed.push_edge(n, child);
            }
        }
    }

    collapsed
}
