// src/references/accumulate.rs
//! Routing of file references in a package diagram.
//!
//! A reference from deeper inside the package tree is not drawn from the
//! calling file itself but from the sub-package of the callee's package that
//! contains the caller. That sub-package acts as an accumulator node.

use crate::error::Result;
use crate::fqn::{FileFqn, Hierarchical, PackageFqn};
use crate::graph::SourceTargetPair;

/// How a file-to-file reference shows up in a package diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutedReference {
    /// Caller and callee share a package: drawn file to file.
    Direct { caller: FileFqn, callee: FileFqn },
    /// Caller lives below the callee's package: drawn from `accumulator`.
    Accumulated { accumulator: PackageFqn, callee: FileFqn },
}

impl RoutedReference {
    /// The edge as it enters the graph tally.
    #[must_use]
    pub fn to_pair(&self) -> SourceTargetPair {
        match self {
            Self::Direct { caller, callee } => {
                SourceTargetPair::new(&caller.to_string(), &callee.to_string())
            }
            Self::Accumulated {
                accumulator,
                callee,
            } => SourceTargetPair::new(accumulator.as_str(), &callee.to_string()),
        }
    }
}

/// Routes a reference from `caller` to `callee`.
///
/// Returns `None` when the caller is neither in the callee's package nor
/// below it; such references are not drawn.
///
/// # Errors
/// Never fails for inputs passing the hierarchy check; the error path only
/// guards `next_hierarchy_towards`.
pub fn route_reference(callee: &FileFqn, caller: &FileFqn) -> Result<Option<RoutedReference>> {
    if callee.same_package(caller) {
        return Ok(Some(RoutedReference::Direct {
            caller: caller.clone(),
            callee: callee.clone(),
        }));
    }
    if caller.same_hierarchy(callee) {
        let accumulator = callee.next_hierarchy_towards(caller)?;
        return Ok(Some(RoutedReference::Accumulated {
            accumulator: PackageFqn::new(accumulator),
            callee: callee.clone(),
        }));
    }
    Ok(None)
}
