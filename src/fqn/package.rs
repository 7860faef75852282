// src/fqn/package.rs
//! Package and file identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Hierarchical;
use crate::error::RefGraphError;

/// A package path such as `ch.docksnet.app`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageFqn(String);

impl PackageFqn {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Hierarchical for PackageFqn {
    fn hierarchy(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageFqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source file, located by its package and its file name.
///
/// An empty package is the default package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "FileFqnRepr", into = "FileFqnRepr")]
pub struct FileFqn {
    package: String,
    file_name: String,
}

impl FileFqn {
    /// # Errors
    /// Returns `MalformedFqn` when `file_name` is empty.
    pub fn new(
        package: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Result<Self, RefGraphError> {
        let file_name = file_name.into();
        if file_name.is_empty() {
            return Err(RefGraphError::MalformedFqn {
                kind: "file",
                input: file_name,
            });
        }
        Ok(Self {
            package: package.into(),
            file_name,
        })
    }

    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Hierarchical for FileFqn {
    fn hierarchy(&self) -> &str {
        &self.package
    }

    fn qualified_name(&self) -> String {
        self.to_string()
    }

    fn as_file(&self) -> Option<&FileFqn> {
        Some(self)
    }
}

impl fmt::Display for FileFqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.file_name)
        } else {
            write!(f, "{}.{}", self.package, self.file_name)
        }
    }
}

#[derive(Serialize, Deserialize)]
struct FileFqnRepr {
    #[serde(default)]
    package: String,
    file: String,
}

impl TryFrom<FileFqnRepr> for FileFqn {
    type Error = RefGraphError;

    fn try_from(repr: FileFqnRepr) -> Result<Self, Self::Error> {
        Self::new(repr.package, repr.file)
    }
}

impl From<FileFqn> for FileFqnRepr {
    fn from(fqn: FileFqn) -> Self {
        Self {
            package: fqn.package,
            file: fqn.file_name,
        }
    }
}
