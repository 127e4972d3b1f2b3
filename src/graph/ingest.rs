// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds the initial connection graph and waterbody mapping from tabular input.
//!
//! This is the crate's one genuine input boundary: rows arrive from an external,
//! untrusted-format collaborator (typically a hydrofabric attribute table), so this is where
//! [`crate::errors::IngestWarning`] and [`crate::Error::MalformedInput`] originate.

use crate::errors::IngestWarning;
use crate::graph::Network;
use crate::{Error, NodeId, WaterbodyId};
use indexmap::IndexMap;

/// A single row of the connection table: a source segment and its raw downstream pointer.
///
/// The raw downstream value, rather than an already-parsed `NodeId`, is kept here because the
/// terminal-code convention (any non-positive value means "no downstream") is only meaningful
/// before that conversion.
#[derive(Clone, Copy, Debug)]
pub struct ConnectionRow {
    /// The source node of this row.
    pub node: NodeId,
    /// The raw downstream pointer. Values `<= terminal_code` mean "no downstream".
    pub downstream: i64,
}

/// Builds a [`Network`] from a sequence of connection rows, along with any
/// [`IngestWarning`]s noticed while doing so.
///
/// A downstream value at or below `terminal_code` means "no downstream"; the source is still
/// registered as a key with an empty downstream list. Rows are processed in order; if the same
/// source id appears on more than one row, its downstream targets are appended to the list
/// already registered for the first occurrence (rather than the later row replacing it), and a
/// [`IngestWarning::RepeatedSource`] is recorded the first time this happens for a given node.
pub fn extract_connections(
    rows: impl IntoIterator<Item = ConnectionRow>,
    terminal_code: i64,
) -> (Network, Vec<IngestWarning>) {
    let mut network = Network::new();
    let mut seen: IndexMap<NodeId, usize> = IndexMap::new();
    let mut warnings = Vec::new();
    // Tracks, per node, the index into `warnings` of that node's own `RepeatedSource` entry, so a
    // later repeat bumps the count for the right node instead of whichever warning was pushed
    // most recently.
    let mut warning_index: IndexMap<NodeId, usize> = IndexMap::new();

    for row in rows {
        let occurrence = seen.entry(row.node).or_insert(0);
        if *occurrence == 0 {
            network.ensure_present(row.node);
        } else if *occurrence == 1 {
            warning_index.insert(row.node, warnings.len());
            warnings.push(IngestWarning::RepeatedSource {
                node: row.node,
                extra_occurrences: 1,
            });
        } else if let Some(&idx) = warning_index.get(&row.node) {
            if let IngestWarning::RepeatedSource {
                extra_occurrences, ..
            } = &mut warnings[idx]
            {
                *extra_occurrences += 1;
            }
        }
        *occurrence += 1;

        if row.downstream > terminal_code {
            network.push_edge(row.node, NodeId::new(row.downstream));
        }
    }

    (network, warnings)
}

/// A single row of the waterbody membership table.
#[derive(Clone, Copy, Debug)]
pub struct WaterbodyRow {
    /// The node whose membership is being recorded.
    pub node: NodeId,
    /// The raw waterbody code, or `null` (the sentinel) if the node belongs to no waterbody.
    pub waterbody: i64,
}

/// Builds a waterbody mapping from a sequence of rows, keeping only rows whose waterbody code
/// differs from `null`.
pub fn extract_waterbodies(
    rows: impl IntoIterator<Item = WaterbodyRow>,
    null: i64,
) -> IndexMap<NodeId, WaterbodyId> {
    rows.into_iter()
        .filter(|row| row.waterbody != null)
        .map(|row| (row.node, WaterbodyId::new(row.waterbody)))
        .collect()
}

/// Inverts a waterbody mapping into `WaterbodyId -> member NodeIds`, with member order following
/// input order.
pub fn reverse_surjective_mapping(
    waterbodies: &IndexMap<NodeId, WaterbodyId>,
) -> IndexMap<WaterbodyId, Vec<NodeId>> {
    let mut reversed: IndexMap<WaterbodyId, Vec<NodeId>> = IndexMap::new();
    for (&node, &code) in waterbodies {
        reversed.entry(code).or_default().push(node);
    }
    reversed
}

/// Parses a raw textual connection table (as read from, e.g., a CSV column pair before any
/// numeric typing has been applied) into [`ConnectionRow`]s.
///
/// This is the one place a non-integer id becomes visible to this crate: a row whose id or
/// downstream pointer does not parse as an integer fails the whole call with
/// [`Error::MalformedInput`] rather than being silently dropped.
pub fn parse_connection_rows<'a>(
    raw_rows: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<Vec<ConnectionRow>, Error> {
    raw_rows
        .into_iter()
        .map(|(node, downstream)| {
            let node = node.trim().parse::<i64>().map_err(|_| {
                Error::MalformedInput(format!("source id {:?} is not an integer", node))
            })?;
            let downstream = downstream.trim().parse::<i64>().map_err(|_| {
                Error::MalformedInput(format!(
                    "downstream pointer {:?} is not an integer",
                    downstream
                ))
            })?;
            Ok(ConnectionRow {
                node: NodeId::new(node),
                downstream,
            })
        })
        .collect()
}
