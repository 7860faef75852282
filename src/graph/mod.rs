// src/graph/mod.rs
//! Reference graph model.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]; every
//! caller/callee link is stored on both endpoints.

pub mod model;
pub mod node;

pub use model::{ReferenceGraph, SourceTargetPair};
pub use node::{GraphNode, NodeDescriptor, NodeId, NodeKind};
