// src/analysis/reachability.rs
//! Transitive callee/caller subgraphs, used to mark everything a node reaches
//! (or is reached by).

use indexmap::IndexSet;
use std::collections::HashSet;
use tracing::debug;

use crate::error::{RefGraphError, Result};
use crate::graph::{NodeId, ReferenceGraph};

/// Which links a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Callees,
    Callers,
}

/// Everything `root` reaches through callee links, `root` first.
#[must_use]
pub fn callees_of(graph: &ReferenceGraph, root: NodeId) -> Vec<NodeId> {
    reachable(graph, root, Direction::Callees)
}

/// Everything that reaches `root` through caller links, `root` first.
#[must_use]
pub fn callers_of(graph: &ReferenceGraph, root: NodeId) -> Vec<NodeId> {
    reachable(graph, root, Direction::Callers)
}

/// Depth-first pre-order walk from `root`, visiting each node once.
///
/// Each call owns its visited set. Returns an empty list if `root` is not a
/// node of `graph`.
#[must_use]
pub fn reachable(graph: &ReferenceGraph, root: NodeId, direction: Direction) -> Vec<NodeId> {
    if graph.node(root).is_none() {
        return Vec::new();
    }

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);

        let next: Vec<NodeId> = match direction {
            Direction::Callees => graph.callees(current).collect(),
            Direction::Callers => graph.callers(current).collect(),
        };
        // Reversed so the first neighbor is explored first.
        stack.extend(next.into_iter().rev().filter(|n| !visited.contains(n)));
    }

    order
}

/// Union of the reachable sets of several roots, looked up by FQN.
///
/// # Errors
/// Returns `UnknownNode` if a root is not in the graph.
pub fn mark_transitively(
    graph: &ReferenceGraph,
    roots: &[&str],
    direction: Direction,
) -> Result<IndexSet<NodeId>> {
    let mut marked = IndexSet::new();
    for root in roots {
        let id = graph
            .node_id(root)
            .ok_or_else(|| RefGraphError::UnknownNode((*root).to_string()))?;
        marked.extend(reachable(graph, id, direction));
    }
    debug!(roots = roots.len(), marked = marked.len(), ?direction, "nodes marked");
    Ok(marked)
}
