// src/graph/model.rs
//! The reference graph: an arena of nodes keyed by FQN.
//!
//! The graph is rebuilt from scratch on every refresh. Building takes
//! `&mut self`; analyzers only ever borrow it shared, so a rebuild can never
//! overlap a running analysis.

use std::collections::HashMap;
use tracing::debug;

use super::node::{GraphNode, NodeDescriptor, NodeId, NodeKind};
use crate::counter::IncrementableSet;
use crate::error::Result;

/// A caller-to-callee occurrence, keyed by node FQN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceTargetPair {
    pub source: String,
    pub target: String,
}

impl SourceTargetPair {
    #[must_use]
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceGraph {
    nodes: Vec<GraphNode>,
    registry: HashMap<String, NodeId>,
    weights: HashMap<(NodeId, NodeId), u64>,
}

impl ReferenceGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph from node descriptors and tallied reference pairs.
    ///
    /// Repeated descriptors collapse onto the first one. Each distinct pair
    /// becomes a single link whose weight is its occurrence count. Pairs with
    /// an endpoint outside the node set are dropped. Self-loops are kept.
    ///
    /// # Errors
    /// Returns `EmptyFqn` if any descriptor has an empty id.
    pub fn build<'a, I>(descriptors: I, pairs: &IncrementableSet<SourceTargetPair>) -> Result<Self>
    where
        I: IntoIterator<Item = &'a NodeDescriptor>,
    {
        let mut graph = Self::new();
        for descriptor in descriptors {
            let id = graph.add_node(&descriptor.id, descriptor.kind)?;
            if let Some(kept) = graph.node(id).map(GraphNode::kind) {
                if kept != descriptor.kind {
                    debug!(
                        fqn = %descriptor.id,
                        %kept,
                        ignored = %descriptor.kind,
                        "conflicting descriptor ignored"
                    );
                }
            }
        }

        // Sorted so adjacency order does not depend on hash order.
        let mut entries: Vec<_> = pairs.entries().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut dropped = 0usize;
        for (pair, count) in entries {
            let (Some(source), Some(target)) =
                (graph.node_id(&pair.source), graph.node_id(&pair.target))
            else {
                dropped += 1;
                continue;
            };
            graph.add_edge(source, target, count);
        }

        debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            dropped,
            "reference graph built"
        );
        Ok(graph)
    }

    /// Registers a node, returning the existing id if the FQN is known.
    ///
    /// # Errors
    /// Returns `EmptyFqn` if `fqn` is empty.
    pub fn add_node(&mut self, fqn: &str, kind: NodeKind) -> Result<NodeId> {
        if let Some(id) = self.registry.get(fqn) {
            return Ok(*id);
        }
        let node = GraphNode::new(fqn, kind)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.registry.insert(fqn.to_string(), id);
        Ok(id)
    }

    /// Links `source -> target` on both sides at once and adds `weight` to
    /// the link's count, saturating at `u64::MAX`. Returns false if either id
    /// is not in this graph or `weight` is zero.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: u64) -> bool {
        if weight == 0 || source.0 >= self.nodes.len() || target.0 >= self.nodes.len() {
            return false;
        }
        if let Some(node) = self.nodes.get_mut(source.0) {
            node.callees.insert(target);
        }
        if let Some(node) = self.nodes.get_mut(target.0) {
            node.callers.insert(source);
        }
        let total = self.weights.entry((source, target)).or_insert(0);
        *total = total.saturating_add(weight);
        true
    }

    #[must_use]
    pub fn node_id(&self, fqn: &str) -> Option<NodeId> {
        self.registry.get(fqn).copied()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.0)
    }

    /// FQN of `id`, or an empty string for a foreign id.
    #[must_use]
    pub fn fqn(&self, id: NodeId) -> &str {
        self.node(id).map_or("", GraphNode::fqn)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn callees(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|n| n.callees.iter().copied())
    }

    pub fn callers(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|n| n.callers.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Number of recorded occurrences of `source -> target`, 0 if unlinked.
    #[must_use]
    pub fn weight(&self, source: NodeId, target: NodeId) -> u64 {
        self.weights.get(&(source, target)).copied().unwrap_or(0)
    }

    /// Diagram label for an edge: blank for a single reference, the count otherwise.
    #[must_use]
    pub fn edge_label(&self, source: NodeId, target: NodeId) -> String {
        match self.weight(source, target) {
            0 | 1 => String::new(),
            n => n.to_string(),
        }
    }
}
