// src/references/mod.rs
//! Buckets for references that leave the diagrammed scope.
//!
//! Each reference from another file is sorted by its structural distance
//! from the own file: same package, inside the own package's ancestry, or
//! anywhere else.

pub mod accumulate;

pub use accumulate::{route_reference, RoutedReference};

use serde::Serialize;
use std::fmt;

use crate::counter::IncrementableSet;
use crate::fqn::{FileFqn, Hierarchical};

/// A referencing file and how often it references the scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReference {
    pub file: FileFqn,
    pub count: u64,
}

/// Per-file occurrence counts within one bucket.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCount {
    references: IncrementableSet<FileFqn>,
}

impl ReferenceCount {
    pub fn increment(&mut self, file: &FileFqn) {
        self.references.increment(file.clone());
    }

    /// Number of distinct files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.references.len()
    }

    #[must_use]
    pub fn get(&self, file: &FileFqn) -> u64 {
        self.references.get(file)
    }

    /// All files with their counts, most-referencing first, then by name.
    #[must_use]
    pub fn reference_list(&self) -> Vec<FileReference> {
        let mut list: Vec<FileReference> = self
            .references
            .entries()
            .map(|(file, count)| FileReference {
                file: file.clone(),
                count,
            })
            .collect();
        list.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.file.cmp(&b.file)));
        list
    }
}

/// Which bucket a reference landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Locality {
    SamePackage,
    SameHierarchy,
    OtherHierarchy,
}

impl Locality {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SamePackage => "Same Package",
            Self::SameHierarchy => "Same Hierarchy",
            Self::OtherHierarchy => "Other Hierarchy",
        }
    }
}

/// Classifies `other` relative to `own`. `None` for a self-reference.
#[must_use]
pub fn classify(own: &dyn Hierarchical, other: &FileFqn) -> Option<Locality> {
    if own.as_file() == Some(other) {
        return None;
    }
    if own.same_package(other) {
        return Some(Locality::SamePackage);
    }
    if own.same_hierarchy(other) {
        return Some(Locality::SameHierarchy);
    }
    Some(Locality::OtherHierarchy)
}

/// One labelled bucket of the navigable reference tree.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceBucket {
    pub locality: Locality,
    pub label: &'static str,
    pub references: Vec<FileReference>,
}

/// Outer references of one diagram, rebuilt on every refresh.
#[derive(Debug, Clone, Default)]
pub struct OuterReferences {
    base: Option<FileFqn>,
    same_package: ReferenceCount,
    in_hierarchy: ReferenceCount,
    other_hierarchy: ReferenceCount,
}

impl OuterReferences {
    #[must_use]
    pub fn new(base: FileFqn) -> Self {
        Self {
            base: Some(base),
            ..Self::default()
        }
    }

    /// The state before any diagram was analyzed.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn base(&self) -> Option<&FileFqn> {
        self.base.as_ref()
    }

    /// Records one reference occurrence from `other` into the scope of `own`.
    pub fn update(&mut self, own: &dyn Hierarchical, other: &FileFqn) {
        match classify(own, other) {
            Some(Locality::SamePackage) => self.same_package.increment(other),
            Some(Locality::SameHierarchy) => self.in_hierarchy.increment(other),
            Some(Locality::OtherHierarchy) => self.other_hierarchy.increment(other),
            None => {}
        }
    }

    #[must_use]
    pub fn bucket(&self, locality: Locality) -> &ReferenceCount {
        match locality {
            Locality::SamePackage => &self.same_package,
            Locality::SameHierarchy => &self.in_hierarchy,
            Locality::OtherHierarchy => &self.other_hierarchy,
        }
    }

    #[must_use]
    pub fn references_same_package(&self) -> Vec<FileReference> {
        self.same_package.reference_list()
    }

    #[must_use]
    pub fn references_same_hierarchy(&self) -> Vec<FileReference> {
        self.in_hierarchy.reference_list()
    }

    #[must_use]
    pub fn references_other_hierarchy(&self) -> Vec<FileReference> {
        self.other_hierarchy.reference_list()
    }

    /// Distinct file counts per bucket: `same/hierarchy/other`.
    #[must_use]
    pub fn toolbar_string(&self) -> String {
        format!(
            "{}/{}/{}",
            self.same_package.file_count(),
            self.in_hierarchy.file_count(),
            self.other_hierarchy.file_count()
        )
    }

    /// The three buckets, nearest first.
    #[must_use]
    pub fn as_tree(&self) -> Vec<ReferenceBucket> {
        [
            Locality::SamePackage,
            Locality::SameHierarchy,
            Locality::OtherHierarchy,
        ]
        .into_iter()
        .map(|locality| ReferenceBucket {
            locality,
            label: locality.label(),
            references: self.bucket(locality).reference_list(),
        })
        .collect()
    }
}

impl fmt::Display for OuterReferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.toolbar_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fqn::{ClassFqn, PackageFqn};

    fn file(package: &str, name: &str) -> FileFqn {
        FileFqn::new(package, name).unwrap()
    }

    #[test]
    fn test_self_reference_ignored() {
        let own = file("a.b", "Own.java");
        let mut refs = OuterReferences::new(own.clone());
        refs.update(&own, &own);
        assert_eq!(refs.toolbar_string(), "0/0/0");
    }

    #[test]
    fn test_same_package_bucket() {
        let own = file("a.b", "Own.java");
        let mut refs = OuterReferences::new(own.clone());
        refs.update(&own, &file("a.b", "Other.java"));
        assert_eq!(refs.toolbar_string(), "1/0/0");
    }

    #[test]
    fn test_ancestor_package_is_in_hierarchy() {
        let own = file("a.b.c", "Own.java");
        let mut refs = OuterReferences::new(own.clone());
        refs.update(&own, &file("a", "Top.java"));
        refs.update(&own, &file("a.b", "Mid.java"));
        assert_eq!(refs.toolbar_string(), "0/2/0");
    }

    #[test]
    fn test_descendant_and_sibling_are_other_hierarchy() {
        let own = file("a.b", "Own.java");
        let mut refs = OuterReferences::new(own.clone());
        refs.update(&own, &file("a.x", "Sibling.java"));
        refs.update(&own, &file("a.b.c", "Child.java"));
        assert_eq!(refs.toolbar_string(), "0/0/2");
    }

    #[test]
    fn test_occurrences_counted_per_file() {
        let own = file("a.b", "Own.java");
        let other = file("a.b", "Other.java");
        let mut refs = OuterReferences::new(own.clone());
        for _ in 0..3 {
            refs.update(&own, &other);
        }
        refs.update(&own, &file("a.b", "Third.java"));

        assert_eq!(refs.toolbar_string(), "2/0/0");
        assert_eq!(
            refs.references_same_package(),
            vec![
                FileReference { file: other, count: 3 },
                FileReference { file: file("a.b", "Third.java"), count: 1 },
            ]
        );
    }

    #[test]
    fn test_package_as_own_scope() {
        let own = PackageFqn::new("a.b");
        assert_eq!(
            classify(&own, &file("a.b", "X.java")),
            Some(Locality::SamePackage)
        );
        assert_eq!(classify(&own, &file("a", "Y.java")), Some(Locality::SameHierarchy));
    }

    #[test]
    fn test_class_named_like_a_file_is_not_self() {
        let own = ClassFqn::new("a.B");
        let mut refs = OuterReferences::empty();
        refs.update(&own, &file("a", "B"));
        assert_eq!(refs.toolbar_string(), "1/0/0");
        assert_eq!(classify(&own, &file("a", "B")), Some(Locality::SamePackage));
    }

    #[test]
    fn test_tree_order_and_labels() {
        let refs = OuterReferences::empty();
        let labels: Vec<_> = refs.as_tree().iter().map(|b| b.label).collect();
        assert_eq!(labels, ["Same Package", "Same Hierarchy", "Other Hierarchy"]);
        assert!(refs.base().is_none());
    }
}
