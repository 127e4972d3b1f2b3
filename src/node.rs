// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

/// An opaque, comparable, hashable identifier for a segment in a river network.
///
/// `NodeId` wraps the raw integer keys used by the upstream hydrofabric (COMID-style feature
/// identifiers) without attaching any further meaning to them. Every query and transformation
/// in this crate treats `NodeId` as a plain key: order comparisons beyond equality are never
/// load-bearing, so the type derives no numeric behavior beyond what's needed to store it in a
/// map and print it in diagnostics.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(i64);

impl NodeId {
    /// Constructs a new `NodeId` from a raw integer key.
    pub fn new(raw: i64) -> Self {
        NodeId(raw)
    }

    /// Returns the raw integer key backing this `NodeId`.
    pub fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NodeId {
    fn from(raw: i64) -> Self {
        NodeId::new(raw)
    }
}

/// Identifies a waterbody (reservoir or lake) overlaid on top of a [`NodeId`] graph.
///
/// A `WaterbodyId` and a `NodeId` inhabit the same identifier space: after
/// [`collapse_waterbodies`](crate::graph::collapse_waterbodies) runs, a waterbody's code *is* a
/// node of the resulting graph. The alias exists purely to document intent at call sites.
pub type WaterbodyId = NodeId;
