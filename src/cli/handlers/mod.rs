// src/cli/handlers/mod.rs
//! Command handlers.

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::analysis::{mark_transitively, Direction, LcomHsAnalyzer};
use crate::config::Config;
use crate::document::GraphDocument;
use crate::error::RefGraphError;
use crate::exit::RefGraphExit;
use crate::fqn::{Hierarchical, PackageFqn};
use crate::report::{self, AnalysisReport};

/// Handles the analyze command.
///
/// # Errors
/// Returns error if a directory cannot be scanned or output fails.
pub fn handle_analyze(config: &Config, paths: &[PathBuf], json: bool) -> Result<RefGraphExit> {
    let files = collect_documents(paths)?;
    if files.is_empty() {
        report_failure("no graph documents found");
        return Ok(RefGraphExit::InvalidInput);
    }
    debug!(documents = files.len(), "analyzing");

    let analyzer = LcomHsAnalyzer::with_strategy(config.strategy());
    let results: Vec<(PathBuf, crate::error::Result<AnalysisReport>)> = files
        .par_iter()
        .map(|path| {
            let result = GraphDocument::from_path(path)
                .and_then(|document| AnalysisReport::analyze(path, &document, &analyzer));
            (path.clone(), result)
        })
        .collect();

    let mut reports = Vec::with_capacity(results.len());
    let mut exit = RefGraphExit::Success;
    for (path, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                report_failure(&format!("{}: {e}", path.display()));
                exit = worst(exit, exit_for(&e));
            }
        }
    }

    if json {
        report::print_json(&reports)?;
    } else {
        reports.iter().for_each(report::print_report);
    }
    Ok(exit)
}

/// Handles the mark command.
///
/// # Errors
/// Returns error if the document cannot be read.
pub fn handle_mark(file: &Path, roots: &[String], direction: Direction) -> Result<RefGraphExit> {
    let graph = match GraphDocument::from_path(file).and_then(|d| d.build_graph()) {
        Ok(graph) => graph,
        Err(e) => return fail_or_propagate(e),
    };

    let roots: Vec<&str> = roots.iter().map(String::as_str).collect();
    match mark_transitively(&graph, &roots, direction) {
        Ok(marked) => {
            for id in marked {
                println!("{}", graph.fqn(id));
            }
            Ok(RefGraphExit::Success)
        }
        Err(e) => fail_or_propagate(e),
    }
}

/// Handles the next command.
///
/// # Errors
/// Never fails; an unrelated target is reported as invalid input.
pub fn handle_next(from: &str, target: &str) -> Result<RefGraphExit> {
    match PackageFqn::new(from).next_hierarchy_towards(&PackageFqn::new(target)) {
        Ok(next) => {
            println!("{next}");
            Ok(RefGraphExit::Success)
        }
        Err(e) => fail_or_propagate(e),
    }
}

fn collect_documents(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }
        let mut found = Vec::new();
        for entry in WalkDir::new(path) {
            let entry = entry.map_err(RefGraphError::from)?;
            if entry.file_type().is_file() && is_json(entry.path()) {
                found.push(entry.into_path());
            }
        }
        found.sort();
        files.extend(found);
    }
    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Host-data problems map to `InvalidInput`; anything else is a real error.
fn exit_for(error: &RefGraphError) -> RefGraphExit {
    match error {
        RefGraphError::Io { .. } | RefGraphError::Toml(_) => RefGraphExit::Error,
        _ => RefGraphExit::InvalidInput,
    }
}

fn worst(a: RefGraphExit, b: RefGraphExit) -> RefGraphExit {
    if b.code() > a.code() {
        b
    } else {
        a
    }
}

fn fail_or_propagate(error: RefGraphError) -> Result<RefGraphExit> {
    match exit_for(&error) {
        RefGraphExit::InvalidInput => {
            report_failure(&error.to_string());
            Ok(RefGraphExit::InvalidInput)
        }
        _ => Err(error.into()),
    }
}

fn report_failure(message: &str) {
    eprintln!("{} {message}", "error:".red());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_documents_scans_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        for path in [dir.path().join("b.json"), nested.join("a.json"), dir.path().join("notes.txt")] {
            fs::write(&path, "{}").unwrap();
        }

        let files = collect_documents(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| is_json(f)));
    }

    #[test]
    fn test_explicit_files_kept_as_given() {
        let files = collect_documents(&[PathBuf::from("missing.json")])
            .unwrap();
        assert_eq!(files, [PathBuf::from("missing.json")]);
    }

    #[test]
    fn test_exit_mapping() {
        assert_eq!(exit_for(&RefGraphError::EmptyFqn), RefGraphExit::InvalidInput);
        assert_eq!(
            exit_for(&RefGraphError::io(std::io::Error::other("x"), "p")),
            RefGraphExit::Error
        );
        assert_eq!(
            worst(RefGraphExit::Error, RefGraphExit::InvalidInput),
            RefGraphExit::InvalidInput
        );
    }
}
