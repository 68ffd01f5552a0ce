use edgekey_graph::{LabeledGraph, MultiGraph};

use crate::SubgraphMatcher;

type TestGraph = MultiGraph<&'static str, &'static str>;

fn build(
    nodes: &[&'static str],
    edges: &[(&'static str, &'static str, &'static str)],
) -> TestGraph {
    let mut g = MultiGraph::new();
    for &n in nodes {
        g.add_node(n);
    }
    for &(src, dst, key) in edges {
        g.add_edge(src, dst, key).unwrap();
    }
    g
}

fn bindings(m: &crate::Match<TestGraph>) -> Vec<(&'static str, &'static str)> {
    m.mapping.iter().map(|(p, g)| (*p, *g)).collect()
}

#[test]
fn empty_pattern_matches_nothing() {
    let graph = build(&["p", "q"], &[("p", "q", "x")]);
    let pattern = build(&[], &[]);
    assert!(SubgraphMatcher::enumerate_all(&graph, &pattern).is_empty());

    let empty_graph = build(&[], &[]);
    assert!(SubgraphMatcher::enumerate_all(&empty_graph, &pattern).is_empty());
}

#[test]
fn single_node_pattern_matches_every_graph_node() {
    let graph = build(&["p", "q", "r"], &[("p", "q", "x"), ("r", "r", "id")]);
    let pattern = build(&["A"], &[]);

    let matches = SubgraphMatcher::enumerate_all(&graph, &pattern);
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].mapping.len(), 1);
    assert!(!matches[0].mapping.is_empty());

    let mapped: Vec<_> = matches.iter().map(bindings).collect();
    assert_eq!(
        mapped,
        vec![vec![("A", "p")], vec![("A", "q")], vec![("A", "r")]]
    );

    // Each induced subgraph is the one assigned node plus its own self-edges.
    assert_eq!(matches[0].subgraph.nodes(), vec!["p"]);
    assert_eq!(matches[0].subgraph.edge_count(), 0);
    assert_eq!(matches[2].subgraph.nodes(), vec!["r"]);
    assert_eq!(matches[2].subgraph.edges(), vec![("r", "r", "id")]);
}

#[test]
fn pattern_edge_gates_on_presence_and_key() {
    let graph = build(&["p", "q", "r"], &[("p", "q", "x")]);
    let pattern = build(&["A", "B"], &[("A", "B", "x")]);

    let matches = SubgraphMatcher::enumerate_all(&graph, &pattern);
    assert_eq!(matches.len(), 1);
    assert_eq!(bindings(&matches[0]), vec![("A", "p"), ("B", "q")]);
    assert_eq!(matches[0].subgraph.nodes(), vec!["p", "q"]);
    assert_eq!(matches[0].subgraph.edges(), vec![("p", "q", "x")]);

    // Same shape, wrong key: no match.
    let pattern = build(&["A", "B"], &[("A", "B", "y")]);
    assert!(SubgraphMatcher::enumerate_all(&graph, &pattern).is_empty());
}

#[test]
fn self_edge_pattern_matches_looping_node() {
    let graph = build(&["g", "h"], &[("g", "g", "x"), ("g", "h", "x")]);
    let pattern = build(&["A"], &[("A", "A", "x")]);

    let matches = SubgraphMatcher::enumerate_all(&graph, &pattern);
    assert_eq!(matches.len(), 1);
    assert_eq!(bindings(&matches[0]), vec![("A", "g")]);
    assert_eq!(matches[0].subgraph.nodes(), vec!["g"]);
    assert_eq!(matches[0].subgraph.edges(), vec![("g", "g", "x")]);
}

#[test]
fn distinct_pattern_nodes_may_share_a_graph_node() {
    // A single looping node satisfies a two-node pattern edge: the mapping
    // is not required to be injective.
    let graph = build(&["g"], &[("g", "g", "x")]);
    let pattern = build(&["A", "B"], &[("A", "B", "x")]);

    let matches = SubgraphMatcher::enumerate_all(&graph, &pattern);
    assert_eq!(matches.len(), 1);
    assert_eq!(bindings(&matches[0]), vec![("A", "g"), ("B", "g")]);
    assert_eq!(matches[0].subgraph.nodes(), vec!["g"]);
}

#[test]
fn duplicate_requirements_are_checked_not_consumed() {
    // Both A and C land on p, so B requires the in-edge (p, "x") twice.
    // One graph edge satisfies both requirements.
    let graph = build(&["p", "q"], &[("p", "q", "x")]);
    let pattern = build(
        &["A", "C", "B"],
        &[("A", "B", "x"), ("C", "B", "x")],
    );

    let matches = SubgraphMatcher::enumerate_all(&graph, &pattern);
    assert_eq!(matches.len(), 1);
    assert_eq!(
        bindings(&matches[0]),
        vec![("A", "p"), ("C", "p"), ("B", "q")]
    );
}

#[test]
fn induced_subgraph_carries_edges_the_pattern_never_asked_for() {
    let graph = build(&["p", "q"], &[("p", "q", "x"), ("p", "q", "y")]);
    let pattern = build(&["A", "B"], &[("A", "B", "x")]);

    let matches = SubgraphMatcher::enumerate_all(&graph, &pattern);
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0].subgraph.edges(),
        vec![("p", "q", "x"), ("p", "q", "y")]
    );
}

#[test]
fn matches_follow_graph_node_order() {
    let graph = build(
        &["p", "q", "r"],
        &[("p", "q", "x"), ("q", "r", "x"), ("r", "p", "x")],
    );
    let pattern = build(&["A", "B"], &[("A", "B", "x")]);

    let matches = SubgraphMatcher::enumerate_all(&graph, &pattern);
    let mapped: Vec<_> = matches.iter().map(bindings).collect();
    assert_eq!(
        mapped,
        vec![
            vec![("A", "p"), ("B", "q")],
            vec![("A", "q"), ("B", "r")],
            vec![("A", "r"), ("B", "p")],
        ]
    );
}

#[test]
fn constraints_are_rechecked_from_the_later_endpoint() {
    // The pattern edge B -> A points at the node processed first, so it only
    // becomes checkable when B is bound. p has no incoming "x" edge, so the
    // only match anchors A at q.
    let graph = build(&["p", "q"], &[("p", "q", "x")]);
    let pattern = build(&["A", "B"], &[("B", "A", "x")]);

    let matches = SubgraphMatcher::enumerate_all(&graph, &pattern);
    assert_eq!(matches.len(), 1);
    assert_eq!(bindings(&matches[0]), vec![("A", "q"), ("B", "p")]);
}
