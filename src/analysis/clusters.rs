// src/analysis/clusters.rs
//! Independent cluster counting.
//!
//! Two clusters are independent when no caller/callee link joins them, e.g.
//! two groups of methods and fields that never touch each other. Edge
//! direction is ignored.

use std::collections::HashSet;
use tracing::debug;

use crate::graph::{NodeId, ReferenceGraph};

/// Counts weakly connected components. Isolated nodes are singleton clusters.
#[must_use]
pub fn count_clusters(graph: &ReferenceGraph) -> usize {
    let mut visited = HashSet::new();
    let mut clusters = 0;

    for id in graph.node_ids() {
        if !visited.contains(&id) {
            clusters += 1;
            visit_cluster(graph, id, &mut visited);
        }
    }

    debug!(clusters, nodes = graph.len(), "clusters counted");
    clusters
}

fn visit_cluster(graph: &ReferenceGraph, start: NodeId, visited: &mut HashSet<NodeId>) {
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(current) = stack.pop() {
        for neighbor in graph.callers(current).chain(graph.callees(current)) {
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }
}
