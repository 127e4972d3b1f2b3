// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::fixtures::{ids, network};
use crate::graph::{kahn_toposort, kahn_toposort_edges};
use crate::{Error, NodeId};
use itertools::Itertools;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

#[test]
fn toposort_orders_every_node_before_its_children() {
    let g = network(&[(1, &[3]), (2, &[3]), (3, &[4]), (4, &[])]);
    let order = kahn_toposort(&g).unwrap();
    assert_eq!(order.len(), 4);

    let position: HashMap<NodeId, usize> = order.iter().copied().zip(0..).collect();
    for (src, dst) in g.edges() {
        assert!(
            position[&src] < position[&dst],
            "{} must precede {} in a valid linear extension",
            src,
            dst
        );
    }
}

#[test]
fn toposort_includes_implicit_sinks() {
    let g = network(&[(1, &[2])]);
    let order = kahn_toposort(&g).unwrap();
    let mut sorted = order;
    sorted.sort();
    assert_eq!(sorted, ids(&[1, 2]));
}

#[test]
fn toposort_fails_on_a_cycle() {
    // 1 -> 2 -> 3 -> 1.
    let g = network(&[(1, &[2]), (2, &[3]), (3, &[1])]);
    let result = kahn_toposort(&g);
    assert!(matches!(result, Err(Error::CycleDetected { .. })));
}

#[test]
fn toposort_on_a_single_node_with_no_edges() {
    let g = network(&[(1, &[])]);
    let order = kahn_toposort(&g).unwrap();
    assert_eq!(order, ids(&[1]));
}

#[test]
fn toposort_edges_preserve_each_source_neighbor_order() {
    let g = network(&[(1, &[3, 2]), (2, &[3]), (3, &[])]);
    let edges = kahn_toposort_edges(&g).unwrap();
    // Every edge out of node 1 must still appear with 3 before 2, matching the network's own
    // neighbor order, regardless of where node 1 lands in the linear extension.
    let from_one: Vec<NodeId> = edges
        .iter()
        .filter(|(src, _)| *src == NodeId::new(1))
        .map(|&(_, dst)| dst)
        .collect();
    assert_eq!(from_one, ids(&[3, 2]));
}

#[test]
fn toposort_edges_propagate_cycle_errors() {
    let g = network(&[(1, &[2]), (2, &[1])]);
    assert!(kahn_toposort_edges(&g).is_err());
}

#[test]
fn toposort_on_disjoint_components_places_each_node_once() {
    let g = network(&[(1, &[2]), (3, &[4])]);
    let order = kahn_toposort(&g).unwrap();
    assert_eq!(order.iter().unique().count(), 4);
}
