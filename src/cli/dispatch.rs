// src/cli/dispatch.rs
//! Command dispatch, kept out of the binary.

use anyhow::Result;
use std::path::Path;

use super::args::Commands;
use super::handlers::{handle_analyze, handle_mark, handle_next};
use crate::analysis::Direction;
use crate::config::Config;
use crate::exit::RefGraphExit;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<RefGraphExit> {
    let config = Config::load(config_path)?;
    if !config.preferences.color {
        colored::control::set_override(false);
    }

    match command {
        Commands::Analyze { paths, json } => {
            handle_analyze(&config, &paths, json || config.preferences.json)
        }
        Commands::Mark {
            file,
            roots,
            callers,
        } => {
            let direction = if callers {
                Direction::Callers
            } else {
                Direction::Callees
            };
            handle_mark(&file, &roots, direction)
        }
        Commands::Next { from, target } => handle_next(&from, &target),
    }
}
