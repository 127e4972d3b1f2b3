// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::Network;
use crate::{Error, NodeId};
use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};

/// Builds a scratch `petgraph` graph mirroring `network`, along with a lookup from [`NodeId`] to
/// the corresponding `petgraph` node index.
///
/// Every node of `network` (including implicit sinks) becomes a `petgraph` node, so that
/// `petgraph`'s toposort sees the full node set even when a tailwater has no outgoing edges.
fn to_petgraph(network: &Network) -> (DiGraph<NodeId, ()>, IndexMap<NodeId, NodeIndex>) {
    let mut graph = DiGraph::new();
    let mut index_of: IndexMap<NodeId, NodeIndex> = IndexMap::new();
    for node in network.nodes() {
        let ix = graph.add_node(node);
        index_of.insert(node, ix);
    }
    for (src, dst) in network.edges() {
        graph.add_edge(index_of[&src], index_of[&dst], ());
    }
    (graph, index_of)
}

/// Returns a valid linear extension ("Kahn" topological order) of `network`'s nodes: starting
/// from the nodes with zero in-degree, repeatedly removing one and decrementing the in-degree of
/// its downstream neighbors.
///
/// The order among equally-ready nodes is deterministic given identical input, but otherwise
/// unspecified. Fails with [`Error::CycleDetected`] if any node retains positive residual
/// in-degree once the ready queue is exhausted.
pub fn kahn_toposort(network: &Network) -> Result<Vec<NodeId>, Error> {
    let (graph, _) = to_petgraph(network);
    match petgraph::algo::toposort(&graph, None) {
        Ok(order) => Ok(order.into_iter().map(|ix| graph[ix]).collect()),
        Err(cycle) => Err(Error::CycleDetected {
            witness: graph[cycle.node_id()],
        }),
    }
}

/// Returns the edges of `network` ordered with `src` in [`kahn_toposort`] order and `dst` in
/// `network`'s own neighbor order.
pub fn kahn_toposort_edges(network: &Network) -> Result<Vec<(NodeId, NodeId)>, Error> {
    let order = kahn_toposort(network)?;
    Ok(order
        .into_iter()
        .flat_map(|src| {
            network
                .children(src)
                .iter()
                .map(move |&dst| (src, dst))
        })
        .collect())
}
