//! Concrete insertion-ordered multigraph container.

use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use thiserror::Error;

use crate::query::LabeledGraph;

/// Error raised while building a [`MultiGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge referenced an endpoint that was never added as a node.
    #[error("edge endpoint {node} is not a node of this graph")]
    MissingNode {
        /// Debug rendering of the offending endpoint.
        node: String,
    },
}

impl GraphError {
    fn missing(node: &impl fmt::Debug) -> Self {
        GraphError::MissingNode {
            node: format!("{node:?}"),
        }
    }
}

/// A directed multigraph whose parallel edges are told apart by a key.
///
/// Nodes and edges iterate in insertion order, which makes every query on the
/// graph deterministic across calls. The container is append-only: nodes and
/// edges can be added but not removed, and all read access goes through
/// [`LabeledGraph`] or the inherent accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiGraph<N: Eq + Hash, K> {
    nodes: IndexSet<N>,
    /// Outgoing adjacency: node -> [(destination, key)].
    out: IndexMap<N, Vec<(N, K)>>,
    /// Incoming adjacency: node -> [(source, key)].
    inc: IndexMap<N, Vec<(N, K)>>,
}

impl<N: Eq + Hash, K> Default for MultiGraph<N, K> {
    fn default() -> Self {
        MultiGraph {
            nodes: IndexSet::new(),
            out: IndexMap::new(),
            inc: IndexMap::new(),
        }
    }
}

impl<N: Eq + Hash, K> MultiGraph<N, K> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, counting parallel edges individually.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.out.values().map(Vec::len).sum()
    }
}

impl<N, K> MultiGraph<N, K>
where
    N: Clone + Eq + Hash + fmt::Debug,
    K: Clone + Eq + fmt::Debug,
{
    /// Adds a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        self.nodes.insert(node)
    }

    /// Adds a directed edge `src -(key)-> dst`.
    ///
    /// Both endpoints must have been added beforehand; re-adding an identical
    /// (src, dst, key) triple is a no-op returning `Ok(false)`.
    ///
    /// # Errors
    ///
    /// [`GraphError::MissingNode`] if either endpoint is not a node of this
    /// graph.
    pub fn add_edge(&mut self, src: N, dst: N, key: K) -> Result<bool, GraphError> {
        if !self.nodes.contains(&src) {
            return Err(GraphError::missing(&src));
        }
        if !self.nodes.contains(&dst) {
            return Err(GraphError::missing(&dst));
        }
        let out = self.out.entry(src.clone()).or_default();
        if out.iter().any(|(d, k)| *d == dst && *k == key) {
            return Ok(false);
        }
        out.push((dst.clone(), key.clone()));
        self.inc.entry(dst).or_default().push((src, key));
        Ok(true)
    }

    /// Whether `node` is a node of this graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Whether the edge `src -(key)-> dst` is present.
    #[must_use]
    pub fn has_edge(&self, src: &N, dst: &N, key: &K) -> bool {
        self.out
            .get(src)
            .is_some_and(|edges| edges.iter().any(|(d, k)| d == dst && k == key))
    }

    /// Every edge as a (src, dst, key) triple, source nodes in node order and
    /// edges per source in insertion order.
    #[must_use]
    pub fn edges(&self) -> Vec<(N, N, K)> {
        self.nodes
            .iter()
            .flat_map(|src| {
                self.out
                    .get(src)
                    .into_iter()
                    .flatten()
                    .map(|(dst, key)| (src.clone(), dst.clone(), key.clone()))
            })
            .collect()
    }

    /// Borrowing iterator over the nodes in insertion order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }
}

impl<N, K> LabeledGraph for MultiGraph<N, K>
where
    N: Clone + Eq + Hash + fmt::Debug,
    K: Clone + Eq + fmt::Debug,
{
    type Node = N;
    type Key = K;

    fn nodes(&self) -> Vec<N> {
        self.nodes.iter().cloned().collect()
    }

    fn in_edges(&self, node: &N) -> Vec<(N, K)> {
        self.inc.get(node).cloned().unwrap_or_default()
    }

    fn out_edges(&self, node: &N) -> Vec<(N, K)> {
        self.out.get(node).cloned().unwrap_or_default()
    }

    fn self_keys(&self, node: &N) -> Vec<K> {
        self.out
            .get(node)
            .into_iter()
            .flatten()
            .filter(|(dst, _)| dst == node)
            .map(|(_, key)| key.clone())
            .collect()
    }

    fn induced_subgraph(&self, nodes: &[N]) -> Self {
        let mut sub = MultiGraph::new();
        for node in nodes {
            if self.nodes.contains(node) {
                sub.add_node(node.clone());
            }
        }
        let retained: Vec<N> = sub.nodes.iter().cloned().collect();
        for src in &retained {
            for (dst, key) in self.out.get(src).into_iter().flatten() {
                if sub.nodes.contains(dst) {
                    sub.out
                        .entry(src.clone())
                        .or_default()
                        .push((dst.clone(), key.clone()));
                    sub.inc
                        .entry(dst.clone())
                        .or_default()
                        .push((src.clone(), key.clone()));
                }
            }
        }
        sub
    }
}

impl<N, K> fmt::Display for MultiGraph<N, K>
where
    N: Clone + Eq + Hash + fmt::Debug,
    K: Clone + Eq + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "nodes: [{}]",
            self.nodes.iter().map(|n| format!("{n:?}")).join(", ")
        )?;
        for (src, dst, key) in self.edges() {
            writeln!(f, "  {src:?} -{key:?}-> {dst:?}")?;
        }
        Ok(())
    }
}
