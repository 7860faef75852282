// src/config/mod.rs
pub mod types;

pub use self::types::{AnalysisConfig, Preferences, RefGraphToml};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::analysis::KindSetStrategy;
use crate::error::{RefGraphError, Result};

pub const CONFIG_FILE: &str = "refgraph.toml";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub preferences: Preferences,
    /// Where the settings came from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, or `refgraph.toml` in the working directory.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns `Io` if the file exists but cannot be read, `Toml` if it is
    /// malformed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map_or_else(|| PathBuf::from(CONFIG_FILE), Path::to_path_buf);
        match fs::read_to_string(&path) {
            Ok(content) => {
                let mut config = Self::parse_toml(&content)?;
                debug!(path = %path.display(), "config loaded");
                config.source = Some(path);
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::new())
            }
            Err(e) => Err(RefGraphError::io(e, path)),
        }
    }

    /// # Errors
    /// Returns `Toml` if `content` is malformed.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let parsed: RefGraphToml = toml::from_str(content)?;
        Ok(Self {
            analysis: parsed.analysis,
            preferences: parsed.preferences,
            source: None,
        })
    }

    /// The cohesion roles these settings describe.
    #[must_use]
    pub fn strategy(&self) -> KindSetStrategy {
        KindSetStrategy::new(
            self.analysis.variable_kinds.iter().copied(),
            self.analysis.method_kinds.iter().copied(),
        )
    }
}
