// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "refgraph", version, about = "Reference graph analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Log analysis steps to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Settings file [default: refgraph.toml]
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count clusters, compute LCOM-HS and bucket outer references
    Analyze {
        /// Graph documents or directories of them
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every node reachable from the given roots
    Mark {
        file: PathBuf,
        #[arg(required = true)]
        roots: Vec<String>,
        /// Follow caller links instead of callee links
        #[arg(long)]
        callers: bool,
    },
    /// Print the child package of FROM that leads toward TARGET
    Next { from: String, target: String },
}
