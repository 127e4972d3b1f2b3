// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decompose a river network into depth-ordered reaches for parallel routing.
//!
//! `channel-network` turns a raw table of stream-segment-to-downstream-segment connections
//! (plus an optional overlay of waterbody/reservoir memberships) into an ordered list of
//! **reaches** — maximal simply-connected chains of segments — each tagged with a **depth**
//! that defines a valid parallel execution schedule: any two reaches at the same depth have no
//! dependency on one another and may be routed concurrently, provided every reach at a lower
//! depth has already completed.
//!
//! This crate is the decomposition kernel only. It knows nothing about hydrodynamics, HTTP,
//! configuration files, or process supervision; it consumes plain tabular input and produces a
//! plain ordered list of reaches for some other component (a parallel numerical solver) to
//! consume.
//!
//! # Examples
//!
//! Decompose a small Y-shaped network into a parallel schedule:
//!
//! ```
//! use channel_network::graph::{kahn_toposort, split_at_junction, Network};
//! use channel_network::NodeId;
//!
//! // 1 and 2 both flow into 3, which flows into 4.
//! let mut network = Network::new();
//! network.push_edge(NodeId::new(1), NodeId::new(3));
//! network.push_edge(NodeId::new(2), NodeId::new(3));
//! network.push_edge(NodeId::new(3), NodeId::new(4));
//! network.ensure_present(NodeId::new(4));
//!
//! // A valid linear extension always exists, since the network has no cycles.
//! let order = kahn_toposort(&network).unwrap();
//! assert_eq!(order.len(), 4);
//!
//! // Decomposition walks the *reversed* network so that the schedule flows from tailwater to
//! // headwater.
//! let reversed = network.reverse();
//! let reaches = channel_network::graph::dfs_decomposition_depth_tuple(
//!     &reversed,
//!     split_at_junction(&reversed),
//!     None,
//! );
//! assert_eq!(reaches.len(), 3);
//! ```

#![warn(missing_docs)]

pub mod errors;
pub mod graph;
mod node;

#[cfg(test)]
mod unit_tests;

pub use errors::Error;
pub use node::{NodeId, WaterbodyId};
