// src/analysis/mod.rs
//! Analyses over a built [`crate::graph::ReferenceGraph`].
//!
//! Every call allocates its own traversal state and leaves the graph
//! untouched, so analyses of distinct graphs can run side by side.

pub mod clusters;
pub mod cohesion;
pub mod reachability;

pub use clusters::count_clusters;
pub use cohesion::{
    lcom_hs, CohesionStrategy, DefaultStrategy, KindSetStrategy, LcomHs, LcomHsAnalyzer,
};
pub use reachability::{callees_of, callers_of, mark_transitively, reachable, Direction};
