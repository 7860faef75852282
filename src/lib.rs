// src/lib.rs
pub mod analysis;
pub mod cli;
pub mod config;
pub mod counter;
pub mod document;
pub mod error;
pub mod exit;
pub mod fqn;
pub mod graph;
pub mod references;
pub mod report;
