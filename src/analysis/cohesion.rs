// src/analysis/cohesion.rs
//! LCOM-HS: Henderson-Sellers' lack of cohesion of methods.
//!
//! ```text
//! LCOM-HS = (sum(m(v)) / V - M) / (1 - M)
//! ```
//!
//! where `V` is the number of variables, `M` the number of methods and
//! `m(v)` the number of methods accessing variable `v`. 0 means every method
//! touches every variable; 1 means methods fall apart into groups that share
//! nothing.
//!
//! Henderson-Sellers, B., Constantine, L., Graham, I. Coupling and Cohesion:
//! towards a valid metrics suite for object-oriented analysis and design,
//! Object-oriented Systems, Vol. 3(3), 1996, pp. 143-158.

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::graph::{GraphNode, NodeKind, ReferenceGraph};

/// Decides which nodes take part in the metric and in which role.
pub trait CohesionStrategy {
    fn is_variable(&self, node: &GraphNode) -> bool;
    fn is_method(&self, node: &GraphNode) -> bool;
}

/// Constructors count as methods; constants (static fields) are not fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

impl CohesionStrategy for DefaultStrategy {
    fn is_variable(&self, node: &GraphNode) -> bool {
        matches!(node.kind(), NodeKind::Field)
    }

    fn is_method(&self, node: &GraphNode) -> bool {
        matches!(node.kind(), NodeKind::Method | NodeKind::Constructor)
    }
}

/// Roles assigned by explicit kind lists, e.g. from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSetStrategy {
    variables: HashSet<NodeKind>,
    methods: HashSet<NodeKind>,
}

impl KindSetStrategy {
    #[must_use]
    pub fn new(
        variables: impl IntoIterator<Item = NodeKind>,
        methods: impl IntoIterator<Item = NodeKind>,
    ) -> Self {
        Self {
            variables: variables.into_iter().collect(),
            methods: methods.into_iter().collect(),
        }
    }
}

impl Default for KindSetStrategy {
    fn default() -> Self {
        Self::new(
            [NodeKind::Field],
            [NodeKind::Method, NodeKind::Constructor],
        )
    }
}

impl CohesionStrategy for KindSetStrategy {
    fn is_variable(&self, node: &GraphNode) -> bool {
        self.variables.contains(&node.kind())
    }

    fn is_method(&self, node: &GraphNode) -> bool {
        self.methods.contains(&node.kind())
    }
}

/// A pair of kind predicates: `(is_variable, is_method)`.
impl<V, M> CohesionStrategy for (V, M)
where
    V: Fn(NodeKind) -> bool,
    M: Fn(NodeKind) -> bool,
{
    fn is_variable(&self, node: &GraphNode) -> bool {
        (self.0)(node.kind())
    }

    fn is_method(&self, node: &GraphNode) -> bool {
        (self.1)(node.kind())
    }
}

/// The inputs and result of one LCOM-HS computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LcomHs {
    pub method_count: usize,
    pub variable_count: usize,
    /// Sum over variables of the methods accessing each one.
    pub access_sum: usize,
    pub value: f64,
}

#[derive(Debug, Clone, Default)]
pub struct LcomHsAnalyzer<S = DefaultStrategy> {
    strategy: S,
}

impl LcomHsAnalyzer<DefaultStrategy> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: CohesionStrategy> LcomHsAnalyzer<S> {
    #[must_use]
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub fn analyze(&self, graph: &ReferenceGraph) -> f64 {
        self.measure(graph).value
    }

    /// Computes LCOM-HS along with the counts it was derived from.
    #[must_use]
    pub fn measure(&self, graph: &ReferenceGraph) -> LcomHs {
        let method_count = graph.nodes().filter(|n| self.strategy.is_method(n)).count();
        let variables: Vec<&GraphNode> = graph
            .nodes()
            .filter(|n| self.strategy.is_variable(n))
            .collect();
        let variable_count = variables.len();

        let access_sum = variables
            .iter()
            .map(|v| self.count_accessing_methods(graph, v))
            .sum();

        let value = lcom_hs_value(method_count, variable_count, access_sum);
        debug!(method_count, variable_count, access_sum, value, "lcom-hs computed");

        LcomHs {
            method_count,
            variable_count,
            access_sum,
            value,
        }
    }

    fn count_accessing_methods(&self, graph: &ReferenceGraph, variable: &GraphNode) -> usize {
        variable
            .callers()
            .iter()
            .filter_map(|id| graph.node(*id))
            .filter(|caller| self.strategy.is_method(caller))
            .count()
    }
}

/// LCOM-HS with the default roles.
#[must_use]
pub fn lcom_hs(graph: &ReferenceGraph) -> f64 {
    LcomHsAnalyzer::new().analyze(graph)
}

/// The formula itself, with its degenerate cases pinned down:
/// nothing to couple gives 1, a zero numerator gives 0, and a single method
/// (zero denominator) with a non-zero numerator gives 1.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn lcom_hs_value(method_count: usize, variable_count: usize, access_sum: usize) -> f64 {
    if method_count == 0 || variable_count == 0 {
        return 1.0;
    }

    let methods = method_count as f64;
    let numerator = (access_sum as f64 / variable_count as f64) - methods;
    let denominator = 1.0 - methods;

    if numerator == 0.0 {
        return 0.0;
    }
    if numerator == denominator || denominator == 0.0 {
        return 1.0;
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::IncrementableSet;
    use crate::graph::{NodeDescriptor, SourceTargetPair};

    const DELTA: f64 = 1e-12;

    fn graph(nodes: &[(&str, NodeKind)], edges: &[(&str, &str)]) -> ReferenceGraph {
        let descriptors: Vec<_> = nodes
            .iter()
            .map(|(n, k)| NodeDescriptor::new(n, *k))
            .collect();
        let pairs: IncrementableSet<_> = edges
            .iter()
            .map(|(s, t)| SourceTargetPair::new(s, t))
            .collect();
        ReferenceGraph::build(&descriptors, &pairs).unwrap()
    }

    fn assert_close(actual: f64, expected: f64, desc: &str) {
        assert!(
            (actual - expected).abs() < DELTA,
            "{desc}: expected {expected}, got {actual}"
        );
    }

    use NodeKind::{Constant, Constructor, Field, Method};

    #[test]
    fn test_just_variables() {
        let g = graph(&[("a", Field)], &[]);
        assert_close(lcom_hs(&g), 1.0, "1 field, 0 methods");
    }

    #[test]
    fn test_just_methods() {
        let g = graph(&[("a", Method)], &[]);
        assert_close(lcom_hs(&g), 1.0, "0 fields, 1 method");
    }

    #[test]
    fn test_fully_connected() {
        let g = graph(
            &[("f1", Field), ("f2", Field), ("m1", Method), ("m2", Method)],
            &[("m1", "f1"), ("m1", "f2"), ("m2", "f1"), ("m2", "f2")],
        );
        assert_close(lcom_hs(&g), 0.0, "every method uses every field");
    }

    #[test]
    fn test_disjoint_pairs() {
        let g = graph(
            &[("f1", Field), ("f2", Field), ("m1", Method), ("m2", Method)],
            &[("m1", "f1"), ("m2", "f2")],
        );
        assert_close(lcom_hs(&g), 1.0, "each method owns one field");
    }

    #[test]
    fn test_one_method_two_fields() {
        let g = graph(
            &[("f1", Field), ("f2", Field), ("m1", Method)],
            &[("m1", "f1"), ("m1", "f2")],
        );
        assert_close(lcom_hs(&g), 0.0, "single method using all fields");
    }

    #[test]
    fn test_one_method_missing_a_field() {
        let g = graph(
            &[("f1", Field), ("f2", Field), ("m1", Method)],
            &[("m1", "f1")],
        );
        assert_close(lcom_hs(&g), 1.0, "zero denominator, non-zero numerator");
    }

    #[test]
    fn test_partial_sharing() {
        // m1 -> f1, f2; m2 -> f1; m3 -> f2 : sum = 4, V = 2, M = 3
        // ((4 / 2) - 3) / (1 - 3) = 0.5
        let g = graph(
            &[
                ("f1", Field),
                ("f2", Field),
                ("m1", Method),
                ("m2", Method),
                ("m3", Method),
            ],
            &[("m1", "f1"), ("m1", "f2"), ("m2", "f1"), ("m3", "f2")],
        );
        assert_close(lcom_hs(&g), 0.5, "partial sharing");
    }

    #[test]
    fn test_fractional_average_is_not_truncated() {
        // sum = 3, V = 2, M = 2 : (1.5 - 2) / (1 - 2) = 0.5
        let g = graph(
            &[("f1", Field), ("f2", Field), ("m1", Method), ("m2", Method)],
            &[("m1", "f1"), ("m2", "f1"), ("m2", "f2")],
        );
        assert_close(lcom_hs(&g), 0.5, "real-valued average");
    }

    #[test]
    fn test_constructors_count_constants_do_not() {
        let g = graph(
            &[
                ("f1", Field),
                ("K", Constant),
                ("<init>", Constructor),
                ("m1", Method),
            ],
            &[("<init>", "f1"), ("m1", "f1"), ("m1", "K")],
        );
        let measured = LcomHsAnalyzer::new().measure(&g);
        assert_eq!(measured.method_count, 2);
        assert_eq!(measured.variable_count, 1);
        assert_eq!(measured.access_sum, 2);
        assert_close(measured.value, 0.0, "constructor shares the field");
    }

    #[test]
    fn test_callers_that_are_not_methods_ignored() {
        let g = graph(
            &[("f1", Field), ("f2", Field), ("m1", Method), ("m2", Method), ("init", NodeKind::ClassInitializer)],
            &[("m1", "f1"), ("m2", "f2"), ("init", "f1"), ("init", "f2")],
        );
        assert_close(lcom_hs(&g), 1.0, "initializer is not a method");
    }

    #[test]
    fn test_closure_strategy_counts_constants() {
        // As variables: f1 <- m1, m2 and K <- m1 : (3 / 2 - 2) / (1 - 2) = 0.5
        let g = graph(
            &[("f1", Field), ("K", Constant), ("m1", Method), ("m2", Method)],
            &[("m1", "f1"), ("m1", "K"), ("m2", "f1")],
        );
        let strategy = (
            |k: NodeKind| matches!(k, Field | Constant),
            |k: NodeKind| k == Method,
        );
        let analyzer = LcomHsAnalyzer::with_strategy(strategy);
        assert_close(analyzer.analyze(&g), 0.5, "constant treated as a variable");
        assert_close(lcom_hs(&g), 0.0, "default ignores the constant");
    }

    #[test]
    fn test_kind_set_strategy_matches_default() {
        let g = graph(
            &[("f1", Field), ("m1", Method), ("m2", Method)],
            &[("m1", "f1")],
        );
        let configured = LcomHsAnalyzer::with_strategy(KindSetStrategy::default());
        assert_close(configured.analyze(&g), lcom_hs(&g), "same roles");
    }

    #[test]
    fn test_idempotent() {
        let g = graph(
            &[("f1", Field), ("m1", Method), ("m2", Method)],
            &[("m1", "f1")],
        );
        let analyzer = LcomHsAnalyzer::new();
        assert_close(analyzer.analyze(&g), analyzer.analyze(&g), "recomputed");
    }
}
