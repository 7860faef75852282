// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RefGraphError {
    #[error("Full qualified name must be set")]
    EmptyFqn,

    #[error("'{target}' is not in the same hierarchy as '{from}'")]
    NotInHierarchy { from: String, target: String },

    #[error("'{input}' is not a valid {kind} name")]
    MalformedFqn { kind: &'static str, input: String },

    #[error("Node not found in graph: {0}")]
    UnknownNode(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RefGraphError>;

impl RefGraphError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to RefGraphError::Io with unknown path.
impl From<std::io::Error> for RefGraphError {
    fn from(source: std::io::Error) -> Self {
        Self::io(source, "<unknown>")
    }
}

// Directory scans surface as I/O failures against the offending path.
impl From<walkdir::Error> for RefGraphError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from);
        let source = e
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
        Self::io(source, path)
    }
}
