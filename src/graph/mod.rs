// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Graph primitives, structural queries, waterbody overlays, reach decomposition, topological
//! sort, and ingestion over river-network connection graphs.
//!
//! The central type is [`Network`]: an insertion-order-preserving mapping from a [`NodeId`] to
//! its ordered list of downstream neighbors. Every other function in this module is a pure
//! transformation of, or query over, a `Network`.

mod decompose;
mod ingest;
mod query;
mod toposort;
mod waterbody;

pub use decompose::*;
pub use ingest::*;
pub use query::*;
pub use toposort::*;
pub use waterbody::*;

use crate::NodeId;
use indexmap::IndexMap;
use itertools::Itertools;

/// A directed graph of river-network segments: a mapping from [`NodeId`] to its ordered list of
/// downstream neighbors.
///
/// The key set of a `Network` defines its "known" nodes. A node that appears only as a
/// downstream target (a terminal sink — physically, a tailwater) is not a key, and is
/// discoverable only through [`Network::nodes`]. This mirrors the row-indexed table the network
/// is built from: a row registers its own source id as a key even when its downstream list ends
/// up empty, but never fabricates a row for a target it never saw as a source.
#[derive(Clone, Debug, Default)]
pub struct Network {
    adjacency: IndexMap<NodeId, Vec<NodeId>>,
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Network {
            adjacency: IndexMap::new(),
        }
    }

    /// Returns true if `node` is a key of this network (as opposed to only appearing as a
    /// downstream target).
    pub fn is_known(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns the number of keys in this network. Implicit sink nodes are not counted.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if this network has no keys.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the ordered downstream neighbors of `node`.
    ///
    /// An unknown node (one that is not a key of this network) has no recorded downstream
    /// neighbors, so this returns an empty slice rather than erroring — matching the documented
    /// `UnknownNode` policy (see [`crate::errors`]).
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ensures `node` is present as a key of this network, inserting it with an empty downstream
    /// list if it is not already one. Returns true if the node was newly inserted.
    ///
    /// This is the "default-constructing collection lookup" idiom: every derived graph
    /// ([`Network::reverse`], waterbody collapse, ingestion) must register a node the first time
    /// it is mentioned, even if no edges are ever added from it.
    pub fn ensure_present(&mut self, node: NodeId) -> bool {
        if self.adjacency.contains_key(&node) {
            false
        } else {
            self.adjacency.insert(node, Vec::new());
            true
        }
    }

    /// Appends a downstream edge from `src` to `dst`, registering `src` as a key if it is not
    /// already one. Does not register `dst` as a key — an edge target only becomes a key of the
    /// network if it is later mentioned as a source (or via [`Network::ensure_present`]).
    pub fn push_edge(&mut self, src: NodeId, dst: NodeId) {
        self.adjacency.entry(src).or_default().push(dst);
    }

    /// Iterates over the keys of this network only, in insertion order, excluding implicit sink
    /// nodes that appear solely as downstream targets.
    pub fn keys(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates over every node of this network: every key, in insertion order, followed by
    /// every value that is not itself a key, in first-encounter order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        let known = &self.adjacency;
        known.keys().copied().chain(
            known
                .values()
                .flatten()
                .copied()
                .filter(move |n| !known.contains_key(n))
                .unique(),
        )
    }

    /// Iterates over every edge of this network as `(src, dst)` pairs, in the order `dst`
    /// appears in `src`'s downstream list, with keys traversed in this network's key order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&src, dsts)| dsts.iter().map(move |&dst| (src, dst)))
    }

    /// Builds the reversed network Gᴿ such that `(a, b)` is an edge of `self` iff `(b, a)` is an
    /// edge of the result.
    ///
    /// Every key of `self` is also a key of the result (with an empty downstream list if it has
    /// no predecessors). Downstream lists in the result are ordered by the order in which
    /// predecessors were discovered while scanning `self` in key order — not by `self`'s own
    /// neighbor order, since a reversed edge's source is the original edge's target.
    pub fn reverse(&self) -> Network {
        let mut reversed = Network::new();
        for (&src, dsts) in self.adjacency.iter() {
            reversed.ensure_present(src);
            for &dst in dsts {
                reversed.push_edge(dst, src);
            }
        }
        reversed
    }

    /// Computes the in-degree of every node: the number of inbound edges. Every headwater (a
    /// node with no inbound edges) is present in the result with value 0.
    pub fn in_degrees(&self) -> IndexMap<NodeId, usize> {
        let mut degrees: IndexMap<NodeId, usize> = IndexMap::new();
        for h in headwaters(self) {
            degrees.insert(h, 0);
        }
        for (_, dst) in self.edges() {
            *degrees.entry(dst).or_insert(0) += 1;
        }
        degrees
    }

    /// Computes the out-degree of every node. Equivalent to `self.reverse().in_degrees()`.
    pub fn out_degrees(&self) -> IndexMap<NodeId, usize> {
        self.reverse().in_degrees()
    }
}

impl FromIterator<(NodeId, NodeId)> for Network {
    fn from_iter<T: IntoIterator<Item = (NodeId, NodeId)>>(iter: T) -> Self {
        let mut network = Network::new();
        for (src, dst) in iter {
            network.push_edge(src, dst);
        }
        network
    }
}
