//! Edge constraints a candidate graph node must satisfy.

use edgekey_graph::LabeledGraph;

use crate::mapping::Mapping;

/// The edge requirements for one pattern node, resolved against the bindings
/// that exist when its search level starts.
///
/// Only pattern edges whose other endpoint is already bound contribute a
/// requirement; edges to still-unbound pattern nodes are validated later from
/// the other side, when the search reaches that node. Self-edges are the
/// exception: both endpoints are the node itself, so they are checked
/// immediately.
pub(crate) struct EdgeRequirements<G: LabeledGraph> {
    /// (bound graph node, key) pairs that must appear among the candidate's
    /// incoming edges.
    in_edges: Vec<(G::Node, G::Key)>,
    /// (bound graph node, key) pairs that must appear among the candidate's
    /// outgoing edges.
    out_edges: Vec<(G::Node, G::Key)>,
    /// Keys of self-edges the candidate must carry.
    self_keys: Vec<G::Key>,
}

impl<G: LabeledGraph> EdgeRequirements<G> {
    pub(crate) fn for_pattern_node(pattern: &G, node: &G::Node, mapping: &Mapping<G::Node>) -> Self {
        let in_edges = pattern
            .in_edges(node)
            .into_iter()
            .filter_map(|(src, key)| mapping.get(&src).map(|g| (g.clone(), key)))
            .collect();
        let out_edges = pattern
            .out_edges(node)
            .into_iter()
            .filter_map(|(dst, key)| mapping.get(&dst).map(|g| (g.clone(), key)))
            .collect();
        let self_keys = pattern.self_keys(node);
        EdgeRequirements {
            in_edges,
            out_edges,
            self_keys,
        }
    }

    /// Whether `candidate` carries every required edge.
    ///
    /// Presence checks are non-consuming: one graph edge can satisfy any
    /// number of identical requirements, so duplicate pattern edges between
    /// the same endpoints with the same key do not demand duplicate graph
    /// edges.
    pub(crate) fn satisfied_by(&self, graph: &G, candidate: &G::Node) -> bool {
        if !self.in_edges.is_empty() {
            let present = graph.in_edges(candidate);
            if !self.in_edges.iter().all(|req| present.contains(req)) {
                return false;
            }
        }
        if !self.out_edges.is_empty() {
            let present = graph.out_edges(candidate);
            if !self.out_edges.iter().all(|req| present.contains(req)) {
                return false;
            }
        }
        if self.self_keys.is_empty() {
            return true;
        }
        let present = graph.self_keys(candidate);
        self.self_keys.iter().all(|key| present.contains(key))
    }
}
