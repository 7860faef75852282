// src/report.rs
//! Results of analyzing one graph document, and their console rendering.

use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::analysis::{count_clusters, CohesionStrategy, LcomHs, LcomHsAnalyzer};
use crate::document::GraphDocument;
use crate::error::Result;
use crate::references::ReferenceBucket;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: PathBuf,
    pub nodes: usize,
    pub edges: usize,
    pub clusters: usize,
    pub lcom_hs: LcomHs,
    /// Distinct files per bucket, `same/hierarchy/other`.
    pub toolbar: String,
    pub buckets: Vec<ReferenceBucket>,
}

impl AnalysisReport {
    /// Runs every analysis over one document.
    ///
    /// # Errors
    /// Returns `EmptyFqn` if the document has a node with an empty id.
    pub fn analyze<S: CohesionStrategy>(
        source: &Path,
        document: &GraphDocument,
        cohesion: &LcomHsAnalyzer<S>,
    ) -> Result<Self> {
        let graph = document.build_graph()?;
        let outer = document.outer_references();
        Ok(Self {
            source: source.to_path_buf(),
            nodes: graph.len(),
            edges: graph.edge_count(),
            clusters: count_clusters(&graph),
            lcom_hs: cohesion.measure(&graph),
            toolbar: outer.toolbar_string(),
            buckets: outer.as_tree(),
        })
    }
}

/// Prints a report the way a diagram toolbar and reference tree show it.
pub fn print_report(report: &AnalysisReport) {
    println!(
        "\n{} {} | {} nodes | {} edges",
        "GRAPH".cyan().bold(),
        report.source.display(),
        report.nodes,
        report.edges
    );
    println!("  clusters: {}", format_clusters(report.clusters));
    println!(
        "  LCOM-HS:  {} (M={}, V={}, sum={})",
        format_cohesion(report.lcom_hs.value),
        report.lcom_hs.method_count,
        report.lcom_hs.variable_count,
        report.lcom_hs.access_sum
    );
    println!("  references: {}", report.toolbar.yellow());

    for bucket in &report.buckets {
        if bucket.references.is_empty() {
            continue;
        }
        println!("  {} {}", "▸".yellow(), bucket.label.bold());
        for reference in &bucket.references {
            println!("      {} ({})", reference.file, reference.count);
        }
    }
}

fn format_clusters(n: usize) -> String {
    if n <= 1 {
        n.to_string().green().to_string()
    } else {
        n.to_string().red().to_string()
    }
}

fn format_cohesion(value: f64) -> String {
    let text = format!("{value:.3}");
    if value < 0.5 {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

/// Prints reports as one JSON array.
///
/// # Errors
/// Returns `Json` if serialization fails.
pub fn print_json(reports: &[AnalysisReport]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}
