// tests/unit_graph.rs
//! Graph construction and the analyzers, through the public API.

use refgraph_core::analysis::{
    callees_of, callers_of, count_clusters, lcom_hs, mark_transitively, Direction,
};
use refgraph_core::counter::IncrementableSet;
use refgraph_core::graph::{NodeDescriptor, NodeKind, ReferenceGraph, SourceTargetPair};

fn build(nodes: &[(&str, NodeKind)], edges: &[(&str, &str)]) -> ReferenceGraph {
    let descriptors: Vec<_> = nodes
        .iter()
        .map(|(id, kind)| NodeDescriptor::new(id, *kind))
        .collect();
    let pairs: IncrementableSet<_> = edges
        .iter()
        .map(|(s, t)| SourceTargetPair::new(s, t))
        .collect();
    ReferenceGraph::build(&descriptors, &pairs).unwrap()
}

fn methods(names: &[&'static str]) -> Vec<(&'static str, NodeKind)> {
    names.iter().map(|n| (*n, NodeKind::Method)).collect()
}

#[test]
fn test_no_edges_one_cluster_per_node() {
    let g = build(&methods(&["a", "b", "c", "d"]), &[]);
    assert_eq!(count_clusters(&g), 4);
}

#[test]
fn test_chain_is_one_cluster_in_either_direction() {
    let nodes = methods(&["a", "b", "c", "d"]);
    let forward = build(&nodes, &[("a", "b"), ("b", "c"), ("c", "d")]);
    let reversed = build(&nodes, &[("b", "a"), ("c", "b"), ("d", "c")]);
    let mixed = build(&nodes, &[("a", "b"), ("c", "b"), ("c", "d")]);
    assert_eq!(count_clusters(&forward), 1);
    assert_eq!(count_clusters(&reversed), 1);
    assert_eq!(count_clusters(&mixed), 1);
}

#[test]
fn test_out_of_scope_edges_dropped() {
    let g = build(&methods(&["a", "b"]), &[("a", "outside"), ("outside", "b")]);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(count_clusters(&g), 2);
}

#[test]
fn test_recursion_kept() {
    let g = build(&methods(&["fib"]), &[("fib", "fib")]);
    let fib = g.node_id("fib").unwrap();
    assert_eq!(g.callees(fib).collect::<Vec<_>>(), [fib]);
    assert_eq!(callees_of(&g, fib), [fib]);
}

#[test]
fn test_reachability_includes_root() {
    let g = build(&methods(&["a", "b", "c"]), &[("a", "b"), ("b", "c")]);
    let a = g.node_id("a").unwrap();
    let c = g.node_id("c").unwrap();

    let down: Vec<_> = callees_of(&g, a).into_iter().map(|id| g.fqn(id)).collect();
    assert_eq!(down, ["a", "b", "c"]);
    assert_eq!(callees_of(&g, c), [c]);

    let up: Vec<_> = callers_of(&g, c).into_iter().map(|id| g.fqn(id)).collect();
    assert_eq!(up, ["c", "b", "a"]);
}

#[test]
fn test_cycle_terminates() {
    let g = build(&methods(&["a", "b"]), &[("a", "b"), ("b", "a")]);
    let a = g.node_id("a").unwrap();
    assert_eq!(callees_of(&g, a).len(), 2);
    assert_eq!(callers_of(&g, a).len(), 2);
}

#[test]
fn test_mark_callers_of_field() {
    let g = build(
        &[
            ("state", NodeKind::Field),
            ("read", NodeKind::Method),
            ("write", NodeKind::Method),
            ("main", NodeKind::Method),
        ],
        &[("read", "state"), ("write", "state"), ("main", "read")],
    );
    let marked: Vec<_> = mark_transitively(&g, &["state"], Direction::Callers)
        .unwrap()
        .into_iter()
        .map(|id| g.fqn(id).to_string())
        .collect();
    assert_eq!(marked, ["state", "read", "main", "write"]);
}

#[test]
fn test_cohesion_boundaries() {
    use NodeKind::{Field, Method};
    let one_field = build(&[("f", Field)], &[]);
    assert!((lcom_hs(&one_field) - 1.0).abs() < 1e-12);

    let cross = build(
        &[("f1", Field), ("f2", Field), ("m1", Method), ("m2", Method)],
        &[("m1", "f1"), ("m1", "f2"), ("m2", "f1"), ("m2", "f2")],
    );
    assert!(lcom_hs(&cross).abs() < 1e-12);

    let split = build(
        &[("f1", Field), ("f2", Field), ("m1", Method), ("m2", Method)],
        &[("m1", "f1"), ("m2", "f2")],
    );
    assert!((lcom_hs(&split) - 1.0).abs() < 1e-12);
}

#[test]
fn test_analyses_are_idempotent() {
    let g = build(
        &[("f", NodeKind::Field), ("m", NodeKind::Method), ("n", NodeKind::Method)],
        &[("m", "f")],
    );
    assert_eq!(count_clusters(&g), count_clusters(&g));
    assert_eq!(lcom_hs(&g).to_bits(), lcom_hs(&g).to_bits());
}

#[test]
fn test_edge_labels_follow_weight() {
    let mut pairs = IncrementableSet::new();
    pairs.increment_by(SourceTargetPair::new("a", "b"), 4);
    pairs.increment(SourceTargetPair::new("b", "a"));
    let descriptors = [
        NodeDescriptor::new("a", NodeKind::Method),
        NodeDescriptor::new("b", NodeKind::Method),
    ];
    let g = ReferenceGraph::build(&descriptors, &pairs).unwrap();
    let a = g.node_id("a").unwrap();
    let b = g.node_id("b").unwrap();
    assert_eq!(g.edge_label(a, b), "4");
    assert_eq!(g.edge_label(b, a), "");
}
