// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::Network;
use crate::NodeId;

/// Builds a [`Network`] from a literal adjacency list, e.g.
/// `network(&[(1, &[2]), (2, &[3]), (3, &[])])`.
pub fn network(adjacency: &[(i64, &[i64])]) -> Network {
    let mut g = Network::new();
    for &(src, dsts) in adjacency {
        let src = NodeId::new(src);
        g.ensure_present(src);
        for &dst in dsts {
            g.push_edge(src, NodeId::new(dst));
        }
    }
    g
}

pub fn ids(raw: &[i64]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId::new).collect()
}

pub fn reach(raw: &[i64]) -> Vec<NodeId> {
    ids(raw)
}
