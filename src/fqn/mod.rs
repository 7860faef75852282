// src/fqn/mod.rs
//! Hierarchical identifiers (dot-separated package paths) and member names.
//!
//! Locality of a reference is judged purely on these paths: two identifiers
//! are in the same package when their paths are equal, and in the same
//! hierarchy when one path is a dot-delimited prefix of the other.

pub mod member;
pub mod package;

pub use member::{ClassFqn, FieldFqn, MethodFqn, MethodFqnBuilder};
pub use package::{FileFqn, PackageFqn};

use std::fmt;

use crate::error::{RefGraphError, Result};

/// Anything that lives at a position in the package tree.
pub trait Hierarchical {
    /// The dot-separated package path, e.g. `ch.docksnet.app`.
    fn hierarchy(&self) -> &str;

    /// The full name, member or file part included.
    fn qualified_name(&self) -> String {
        self.hierarchy().to_string()
    }

    /// The file this identifier names, if it is one. Self-references are
    /// recognised through it, so only a file can reference itself.
    fn as_file(&self) -> Option<&FileFqn> {
        None
    }

    /// True when both paths are literally equal.
    fn same_package(&self, other: &dyn Hierarchical) -> bool {
        self.hierarchy() == other.hierarchy()
    }

    /// True when `other`'s path is one of the prefixes of `self`'s path, i.e.
    /// `other` is an ancestor-or-self of `self`.
    ///
    /// This is asymmetric: `self` supplies the prefix list and `other` is the
    /// candidate ancestor. `a.b.c` is in the hierarchy of `a`, but `a` is not
    /// in the hierarchy of `a.b.c`. Use [`Hierarchical::is_ancestor_or_self_of`]
    /// when reading from the ancestor's side.
    fn same_hierarchy(&self, other: &dyn Hierarchical) -> bool {
        package_paths(self.hierarchy()).contains(&other.hierarchy())
    }

    /// `a.is_ancestor_or_self_of(b)` is `b.same_hierarchy(a)`.
    fn is_ancestor_or_self_of(&self, descendant: &dyn Hierarchical) -> bool {
        package_paths(descendant.hierarchy()).contains(&self.hierarchy())
    }

    /// Returns the child path of `self` that leads toward `target`.
    ///
    /// `root.sub` towards `root.sub.more.evenmore` is `root.sub.more`.
    ///
    /// # Errors
    /// Returns `NotInHierarchy` unless `target` lies strictly below `self`.
    fn next_hierarchy_towards(&self, target: &dyn Hierarchical) -> Result<String> {
        let own = self.hierarchy();
        let path = target.hierarchy();

        if !self.is_ancestor_or_self_of(target) || path.len() == own.len() {
            return Err(RefGraphError::NotInHierarchy {
                from: own.to_string(),
                target: path.to_string(),
            });
        }

        let start = own.len() + 1;
        let next = match path.get(start..).and_then(|rest| rest.find('.')) {
            Some(offset) => &path[..start + offset],
            None => path,
        };
        Ok(next.to_string())
    }
}

/// Splits a path into its segments: `a.b.c` is `[a, b, c]`.
#[must_use]
pub fn packages(hierarchy: &str) -> Vec<&str> {
    if hierarchy.is_empty() {
        return Vec::new();
    }
    hierarchy.split('.').collect()
}

/// Every dot-delimited prefix of `hierarchy`, shortest first, including the
/// full path and excluding the empty prefix: `a.b.c` is `[a, a.b, a.b.c]`.
#[must_use]
pub fn package_paths(hierarchy: &str) -> Vec<&str> {
    if hierarchy.is_empty() {
        return Vec::new();
    }
    let mut paths: Vec<&str> = hierarchy
        .match_indices('.')
        .map(|(i, _)| &hierarchy[..i])
        .filter(|p| !p.is_empty())
        .collect();
    paths.push(hierarchy);
    paths
}

/// A parsed identifier of any supported shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fqn {
    Method(MethodFqn),
    Field(FieldFqn),
    Class(ClassFqn),
    Package(PackageFqn),
}

impl Fqn {
    /// Recognises `Class#method(args)`, `Class#field`, `pkg.Class` and `pkg.sub`.
    ///
    /// # Errors
    /// Returns `EmptyFqn` for an empty string, or `MalformedFqn` when a member
    /// name cannot be split into class and member.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(RefGraphError::EmptyFqn);
        }
        if MethodFqn::is_method_fqn(input) {
            return MethodFqn::parse(input).map(Self::Method);
        }
        if FieldFqn::is_field_fqn(input) {
            return FieldFqn::parse(input).map(Self::Field);
        }
        if ClassFqn::is_class_fqn(input) {
            return Ok(Self::Class(ClassFqn::new(input)));
        }
        Ok(Self::Package(PackageFqn::new(input)))
    }
}

impl Hierarchical for Fqn {
    fn hierarchy(&self) -> &str {
        match self {
            Self::Method(m) => m.hierarchy(),
            Self::Field(f) => f.hierarchy(),
            Self::Class(c) => c.hierarchy(),
            Self::Package(p) => p.hierarchy(),
        }
    }

    fn qualified_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Fqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method(m) => write!(f, "{m}"),
            Self::Field(field) => write!(f, "{field}"),
            Self::Class(c) => write!(f, "{c}"),
            Self::Package(p) => write!(f, "{p}"),
        }
    }
}
