// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contains types that describe errors and warnings that `channel-network` methods can return.

use crate::node::NodeId;
use std::error;
use std::fmt;

use Error::*;

/// Error type describing the sorts of errors this crate can return.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// [`kahn_toposort`](crate::graph::kahn_toposort) found a node with residual in-degree once
    /// the queue of ready nodes was exhausted, meaning the graph contains a cycle.
    CycleDetected {
        /// One node known to sit on the offending cycle.
        witness: NodeId,
    },
    /// [`reachable_network`](crate::graph::reachable_network) was called with
    /// `check_disjoint = true` and two or more sources reached a common node.
    GraphInvariantViolation(String),
    /// Ingestion encountered a row that cannot be turned into a graph edge or waterbody
    /// membership (a non-integer id, or an otherwise inconsistent row).
    MalformedInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleDetected { witness } => {
                write!(f, "cycle detected in network, witness node: {}", witness)
            }
            GraphInvariantViolation(msg) => write!(f, "graph invariant violation: {}", msg),
            MalformedInput(msg) => write!(f, "malformed input row: {}", msg),
        }
    }
}

impl error::Error for Error {}

/// Describes non-fatal anomalies noticed while ingesting tabular input.
///
/// Unlike [`Error`], a warning never prevents a graph from being built: it is surfaced
/// alongside a successful construction so a caller can audit ingestion quality without the
/// kernel refusing to proceed.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum IngestWarning {
    /// The same source id appeared on more than one input row. Per `extract_connections`'s
    /// documented semantics, the downstream targets of the later rows are appended to the
    /// list already registered for the first occurrence rather than replacing it.
    RepeatedSource {
        /// The node that was registered more than once.
        node: NodeId,
        /// How many additional rows (beyond the first) named this node as a source.
        extra_occurrences: usize,
    },
}

impl fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use IngestWarning::*;
        match self {
            RepeatedSource {
                node,
                extra_occurrences,
            } => write!(
                f,
                "source node {} appeared on {} additional row(s); downstream targets were appended",
                node, extra_occurrences
            ),
        }
    }
}
