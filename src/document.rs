// src/document.rs
//! JSON graph documents: the host's snapshot of one diagram.
//!
//! ```json
//! {
//!   "scope": { "package": "app.core", "file": "Engine.java" },
//!   "nodes": [{ "id": "Engine#run()", "kind": "Method" }],
//!   "edges": [{ "source": "Engine#run()", "target": "Engine#state", "count": 2 }],
//!   "references": [{ "own": { "package": "app.core", "file": "Engine.java" },
//!                    "other": { "package": "app", "file": "Main.java" } }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::counter::IncrementableSet;
use crate::error::{RefGraphError, Result};
use crate::fqn::FileFqn;
use crate::graph::{NodeDescriptor, ReferenceGraph, SourceTargetPair};
use crate::references::OuterReferences;

/// One `source -> target` entry; `count` repeats it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub source: String,
    pub target: String,
    #[serde(default = "default_count")]
    pub count: u64,
}

const fn default_count() -> u64 {
    1
}

/// A reference from `other` into the scope element `own`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub own: FileFqn,
    pub other: FileFqn,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<FileFqn>,
    #[serde(default)]
    pub nodes: Vec<NodeDescriptor>,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
    #[serde(default)]
    pub references: Vec<ReferenceEntry>,
}

impl GraphDocument {
    /// Reads and parses a document from disk.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Json` if it is malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RefGraphError::io(e, path))?;
        let document: Self = content.parse()?;
        debug!(
            path = %path.display(),
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            "document loaded"
        );
        Ok(document)
    }

    /// Tallies the edge entries; repeated entries accumulate.
    #[must_use]
    pub fn pairs(&self) -> IncrementableSet<SourceTargetPair> {
        let mut pairs = IncrementableSet::new();
        for edge in &self.edges {
            pairs.increment_by(SourceTargetPair::new(&edge.source, &edge.target), edge.count);
        }
        pairs
    }

    /// # Errors
    /// Returns `EmptyFqn` if a node id is empty.
    pub fn build_graph(&self) -> Result<ReferenceGraph> {
        ReferenceGraph::build(&self.nodes, &self.pairs())
    }

    /// Buckets every reference entry relative to its own element.
    #[must_use]
    pub fn outer_references(&self) -> OuterReferences {
        let mut outer = self
            .scope
            .clone()
            .map_or_else(OuterReferences::empty, OuterReferences::new);
        for entry in &self.references {
            outer.update(&entry.own, &entry.other);
        }
        outer
    }
}

impl FromStr for GraphDocument {
    type Err = RefGraphError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
