// src/config/types.rs
use serde::{Deserialize, Serialize};

use crate::graph::NodeKind;

/// On-disk layout of `refgraph.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefGraphToml {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Node kinds playing the variable and method roles in LCOM-HS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_variable_kinds")]
    pub variable_kinds: Vec<NodeKind>,
    #[serde(default = "default_method_kinds")]
    pub method_kinds: Vec<NodeKind>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            variable_kinds: default_variable_kinds(),
            method_kinds: default_method_kinds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub json: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            color: default_true(),
            json: false,
        }
    }
}

const fn default_true() -> bool { true }

fn default_variable_kinds() -> Vec<NodeKind> {
    vec![NodeKind::Field]
}

fn default_method_kinds() -> Vec<NodeKind> {
    vec![NodeKind::Method, NodeKind::Constructor]
}
