//! Subgraph pattern matching over directed, edge-labeled multigraphs.
//!
//! Given a graph and a smaller pattern, [`SubgraphMatcher`] enumerates every
//! assignment of pattern nodes to graph nodes such that each pattern edge
//! (matched by its key) exists between the assigned graph nodes. Matching
//! deviates from classical subgraph isomorphism in two ways, both deliberate:
//!
//! - the assignment need not be injective: distinct pattern nodes may land on
//!   the same graph node;
//! - edge checks test presence, not consumption: one graph edge can satisfy
//!   several identical pattern edges.
//!
//! Each match carries the induced subgraph over the assigned nodes (with all
//! of the graph's edges among them, required by the pattern or not) and the
//! pattern-to-graph node mapping. Results are produced lazily; the search
//! only runs as far as the consumer pulls.
//!
//! # Example
//!
//! ```
//! use edgekey_graph::MultiGraph;
//! use edgekey_subgraph::SubgraphMatcher;
//!
//! let mut graph = MultiGraph::new();
//! for n in ["p", "q", "r"] {
//!     graph.add_node(n);
//! }
//! graph.add_edge("p", "q", "x").unwrap();
//!
//! let mut pattern = MultiGraph::new();
//! pattern.add_node("A");
//! pattern.add_node("B");
//! pattern.add_edge("A", "B", "x").unwrap();
//!
//! let matches = SubgraphMatcher::enumerate_all(&graph, &pattern);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].mapping.get(&"A"), Some(&"p"));
//! assert_eq!(matches[0].mapping.get(&"B"), Some(&"q"));
//! ```

mod constraints;
mod mapping;
mod search;

#[cfg(test)]
mod tests;

pub use crate::mapping::Mapping;
pub use crate::search::SubgraphMatches;

use edgekey_graph::LabeledGraph;

/// One occurrence of the pattern within the graph.
#[derive(Clone, Debug)]
pub struct Match<G: LabeledGraph> {
    /// The graph induced by the assigned nodes, carrying all edges of the
    /// original graph among them.
    pub subgraph: G,
    /// Pattern node to graph node assignment, in pattern processing order.
    pub mapping: Mapping<G::Node>,
}

/// Entry point for subgraph searches.
pub struct SubgraphMatcher;

impl SubgraphMatcher {
    /// Lazily enumerates every match of `pattern` within `graph`.
    ///
    /// The returned iterator is a pure function of its inputs: neither graph
    /// is mutated, and re-invoking with the same inputs replays the same
    /// sequence. An empty pattern yields an empty sequence.
    pub fn find_all<'g, 'p, G: LabeledGraph>(
        graph: &'g G,
        pattern: &'p G,
    ) -> SubgraphMatches<'g, 'p, G> {
        SubgraphMatches::new(graph, pattern)
    }

    /// Eagerly collects every match of `pattern` within `graph`.
    #[must_use]
    pub fn enumerate_all<G: LabeledGraph>(graph: &G, pattern: &G) -> Vec<Match<G>> {
        Self::find_all(graph, pattern).collect()
    }
}
