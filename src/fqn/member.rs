// src/fqn/member.rs
//! Class and class-member identifiers.
//!
//! Members are written `Class#name` for fields and `Class#name(T1,T2)` for
//! methods, where `Class` is the fully qualified class name.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::Hierarchical;
use crate::error::{RefGraphError, Result};

static METHOD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*)#(.*)\((.*)\)").unwrap_or_else(|e| panic!("invalid method pattern: {e}"))
});

/// A fully qualified class name such as `ch.app.Outer.Inner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassFqn {
    fqn: String,
    package_len: usize,
}

impl ClassFqn {
    #[must_use]
    pub fn new(fqn: impl Into<String>) -> Self {
        let fqn = fqn.into();
        let package_len = Self::package_len(&fqn);
        Self { fqn, package_len }
    }

    /// Class names start upper-case by convention; package segments don't.
    #[must_use]
    pub fn is_class_fqn(input: &str) -> bool {
        input
            .rsplit('.')
            .next()
            .and_then(|last| last.chars().next())
            .is_some_and(char::is_uppercase)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.fqn
    }

    /// The package is everything before the first class segment, so nested
    /// classes share their outer class's package.
    fn package_len(fqn: &str) -> usize {
        let mut end = 0;
        for (i, segment) in fqn.split('.').enumerate() {
            if segment.chars().next().is_some_and(char::is_uppercase) {
                break;
            }
            end += segment.len() + usize::from(i > 0);
        }
        end.min(fqn.len())
    }
}

impl Hierarchical for ClassFqn {
    fn hierarchy(&self) -> &str {
        &self.fqn[..self.package_len]
    }

    fn qualified_name(&self) -> String {
        self.fqn.clone()
    }
}

impl fmt::Display for ClassFqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqn)
    }
}

/// A method, identified by class, name and parameter type list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodFqn {
    class: ClassFqn,
    method_name: String,
    parameters: Vec<String>,
}

impl MethodFqn {
    #[must_use]
    pub fn builder(class_name: &str, method_name: &str) -> MethodFqnBuilder {
        MethodFqnBuilder {
            class_name: class_name.to_string(),
            method_name: method_name.to_string(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_method_fqn(input: &str) -> bool {
        METHOD_PATTERN.is_match(input)
    }

    /// Parses `ch.app.Main#method1(int,String,int)`.
    ///
    /// # Errors
    /// Returns `MalformedFqn` if `input` does not match `Class#name(params)`.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || RefGraphError::MalformedFqn {
            kind: "method",
            input: input.to_string(),
        };
        let caps = METHOD_PATTERN.captures(input).ok_or_else(malformed)?;
        let group = |i| caps.get(i).map_or("", |m| m.as_str());

        let parameters = match group(3) {
            "" => Vec::new(),
            list => list.split(',').map(str::to_string).collect(),
        };

        Ok(Self {
            class: ClassFqn::new(group(1)),
            method_name: group(2).to_string(),
            parameters,
        })
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        self.class.as_str()
    }

    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

impl Hierarchical for MethodFqn {
    fn hierarchy(&self) -> &str {
        self.class.hierarchy()
    }

    fn qualified_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MethodFqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{}({})",
            self.class,
            self.method_name,
            self.parameters.join(",")
        )
    }
}

/// Collects parameter types one at a time.
#[derive(Debug, Clone)]
pub struct MethodFqnBuilder {
    class_name: String,
    method_name: String,
    parameters: Vec<String>,
}

impl MethodFqnBuilder {
    #[must_use]
    pub fn parameter(mut self, parameter: &str) -> Self {
        self.parameters.push(parameter.to_string());
        self
    }

    #[must_use]
    pub fn build(self) -> MethodFqn {
        MethodFqn {
            class: ClassFqn::new(self.class_name),
            method_name: self.method_name,
            parameters: self.parameters,
        }
    }
}

/// A field, identified by class and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldFqn {
    class: ClassFqn,
    field_name: String,
}

impl FieldFqn {
    #[must_use]
    pub fn new(class_name: &str, field_name: &str) -> Self {
        Self {
            class: ClassFqn::new(class_name),
            field_name: field_name.to_string(),
        }
    }

    #[must_use]
    pub fn is_field_fqn(input: &str) -> bool {
        input.contains('#') && !input.contains('(')
    }

    /// Parses `ch.app.Main#count`.
    ///
    /// # Errors
    /// Returns `MalformedFqn` if `input` has no `#` separator.
    pub fn parse(input: &str) -> Result<Self> {
        let (class_name, field_name) =
            input
                .rsplit_once('#')
                .ok_or_else(|| RefGraphError::MalformedFqn {
                    kind: "field",
                    input: input.to_string(),
                })?;
        Ok(Self::new(class_name, field_name))
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        self.class.as_str()
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }
}

impl Hierarchical for FieldFqn {
    fn hierarchy(&self) -> &str {
        self.class.hierarchy()
    }

    fn qualified_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldFqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class, self.field_name)
    }
}
