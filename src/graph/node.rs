// src/graph/node.rs
//! Node types for the reference graph.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{RefGraphError, Result};

/// What kind of source element a node stands for. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    Method,
    Field,
    /// A static field.
    Constant,
    Constructor,
    ClassInitializer,
    Class,
    InnerClass,
    StaticInnerClass,
    Enum,
    File,
    Package,
}

impl NodeKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Method => "METHOD",
            Self::Field => "FIELD",
            Self::Constant => "CONSTANT",
            Self::Constructor => "CONSTRUCTOR",
            Self::ClassInitializer => "CLASS_INITIALIZER",
            Self::Class => "CLASS",
            Self::InnerClass => "INNER_CLASS",
            Self::StaticInnerClass => "STATIC_INNER_CLASS",
            Self::Enum => "ENUM",
            Self::File => "FILE",
            Self::Package => "PACKAGE",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable index of a node inside one [`super::ReferenceGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Host-supplied description of a node: its identity and kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: String,
    pub kind: NodeKind,
}

impl NodeDescriptor {
    #[must_use]
    pub fn new(id: &str, kind: NodeKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
        }
    }
}

/// A node with its adjacency, held by index inside the graph arena.
///
/// Equality and hashing use the FQN only.
#[derive(Debug, Clone)]
pub struct GraphNode {
    fqn: String,
    kind: NodeKind,
    pub(crate) callees: IndexSet<NodeId>,
    pub(crate) callers: IndexSet<NodeId>,
}

impl GraphNode {
    /// # Errors
    /// Returns `EmptyFqn` if `fqn` is empty.
    pub fn new(fqn: &str, kind: NodeKind) -> Result<Self> {
        if fqn.is_empty() {
            return Err(RefGraphError::EmptyFqn);
        }
        Ok(Self {
            fqn: fqn.to_string(),
            kind,
            callees: IndexSet::new(),
            callers: IndexSet::new(),
        })
    }

    #[must_use]
    pub fn fqn(&self) -> &str {
        &self.fqn
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[must_use]
    pub fn callees(&self) -> &IndexSet<NodeId> {
        &self.callees
    }

    #[must_use]
    pub fn callers(&self) -> &IndexSet<NodeId> {
        &self.callers
    }
}

impl PartialEq for GraphNode {
    fn eq(&self, other: &Self) -> bool {
        self.fqn == other.fqn
    }
}

impl Eq for GraphNode {}

impl Hash for GraphNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fqn.hash(state);
    }
}
