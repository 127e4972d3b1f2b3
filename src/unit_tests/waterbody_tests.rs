// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::fixtures::{ids, network};
use crate::graph::{
    collapse_waterbodies, reservoir_boundary, reservoir_shore, separate_waterbodies,
};
use crate::NodeId;
use indexmap::IndexMap;
use pretty_assertions::assert_eq;

fn reservoir(members: &[i64], code: i64) -> IndexMap<NodeId, NodeId> {
    members
        .iter()
        .map(|&m| (NodeId::new(m), NodeId::new(code)))
        .collect()
}

#[test]
fn reservoir_shore_excludes_internal_members() {
    // 1 -> 2 -> 3 -> 4, with {2, 3} forming a waterbody.
    let g = network(&[(1, &[2]), (2, &[3]), (3, &[4]), (4, &[])]);
    let shore = reservoir_shore(&g, &ids(&[2, 3]));
    assert_eq!(shore, ids(&[4]));
}

#[test]
fn reservoir_shore_of_a_single_node_reservoir_is_its_children() {
    let g = network(&[(1, &[2]), (2, &[3]), (3, &[])]);
    let shore = reservoir_shore(&g, &ids(&[2]));
    assert_eq!(shore, ids(&[3]));
}

#[test]
fn reservoir_boundary_detects_upstream_neighbor_of_waterbody() {
    let g = network(&[(1, &[2]), (2, &[3]), (3, &[])]);
    let waterbodies = reservoir(&[2], 2);
    assert!(reservoir_boundary(&g, &waterbodies, NodeId::new(1)));
    // A node inside the waterbody is not its own boundary.
    assert!(!reservoir_boundary(&g, &waterbodies, NodeId::new(2)));
    // A node whose children never touch a waterbody is not a boundary either.
    assert!(!reservoir_boundary(&g, &waterbodies, NodeId::new(3)));
}

#[test]
fn reservoir_boundary_is_false_for_unknown_nodes() {
    let g = network(&[(1, &[2])]);
    let waterbodies = reservoir(&[2], 2);
    assert!(!reservoir_boundary(&g, &waterbodies, NodeId::new(99)));
}

#[test]
fn separate_waterbodies_restricts_children_to_in_body_targets() {
    // A three-node reservoir: 1 -> 2 -> 3, with 3 also draining out to 4 (outside the body).
    let g = network(&[(1, &[2]), (2, &[3]), (3, &[4]), (4, &[])]);
    let waterbodies = reservoir(&[1, 2, 3], 1);
    let subs = separate_waterbodies(&g, &waterbodies);

    let sub = &subs[&NodeId::new(1)];
    assert_eq!(sub.children(NodeId::new(1)), &ids(&[2]));
    assert_eq!(sub.children(NodeId::new(2)), &ids(&[3]));
    // Node 3's edge to 4 is dropped since 4 is outside this waterbody.
    assert!(sub.children(NodeId::new(3)).is_empty());
}

#[test]
fn separate_waterbodies_produces_one_subgraph_per_waterbody_code() {
    let g = network(&[(1, &[2]), (2, &[]), (10, &[11]), (11, &[])]);
    let mut waterbodies = IndexMap::new();
    waterbodies.insert(NodeId::new(1), NodeId::new(100));
    waterbodies.insert(NodeId::new(2), NodeId::new(100));
    waterbodies.insert(NodeId::new(10), NodeId::new(200));
    waterbodies.insert(NodeId::new(11), NodeId::new(200));

    let subs = separate_waterbodies(&g, &waterbodies);
    assert_eq!(subs.len(), 2);
    assert!(subs.contains_key(&NodeId::new(100)));
    assert!(subs.contains_key(&NodeId::new(200)));
}

#[test]
fn collapse_waterbodies_replaces_members_with_a_single_synthetic_node() {
    let g = network(&[(1, &[2]), (2, &[3]), (3, &[4]), (4, &[])]);
    let waterbodies = reservoir(&[2, 3], 99);

    let collapsed = collapse_waterbodies(&g, &waterbodies);
    assert_eq!(collapsed.children(NodeId::new(1)), &ids(&[99]));
    assert_eq!(collapsed.children(NodeId::new(99)), &ids(&[4]));
    assert!(!collapsed.is_known(NodeId::new(2)));
    assert!(!collapsed.is_known(NodeId::new(3)));
}

#[test]
fn collapse_waterbodies_emits_each_code_exactly_once() {
    // Two entry points into the same waterbody: 1 -> 2 and 5 -> 2, with {2, 3} the reservoir.
    let g = network(&[(1, &[2]), (5, &[2]), (2, &[3]), (3, &[4]), (4, &[])]);
    let waterbodies = reservoir(&[2, 3], 7);

    let collapsed = collapse_waterbodies(&g, &waterbodies);
    // Both upstream nodes now point at the synthetic code, and the code itself appears once.
    assert_eq!(collapsed.children(NodeId::new(1)), &ids(&[7]));
    assert_eq!(collapsed.children(NodeId::new(5)), &ids(&[7]));
    assert_eq!(
        collapsed.keys().filter(|&n| n == NodeId::new(7)).count(),
        1
    );
}

#[test]
fn collapse_waterbodies_leaves_unrelated_nodes_untouched() {
    let g = network(&[(1, &[2]), (2, &[3]), (3, &[])]);
    let waterbodies = IndexMap::new();
    let collapsed = collapse_waterbodies(&g, &waterbodies);
    assert_eq!(collapsed.children(NodeId::new(1)), &ids(&[2]));
    assert_eq!(collapsed.children(NodeId::new(2)), &ids(&[3]));
}
