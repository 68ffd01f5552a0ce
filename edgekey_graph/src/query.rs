//! Capability contract between a graph container and the matcher.

use std::fmt;
use std::hash::Hash;

/// Read-only view of a directed, edge-labeled multigraph.
///
/// The matcher consumes graphs and patterns purely through this trait; it
/// never mutates them. Implementations must iterate nodes and edges in a
/// deterministic order for the duration of a call so that repeated searches
/// over the same inputs enumerate matches in the same order.
pub trait LabeledGraph: Sized {
    /// Node identifier. Opaque to the matcher: only equality and hashing
    /// are consulted.
    type Node: Clone + Eq + Hash + fmt::Debug;
    /// Edge label distinguishing parallel edges between the same ordered
    /// pair of nodes.
    type Key: Clone + Eq + fmt::Debug;

    /// All nodes, in the graph's deterministic iteration order.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Incoming edges of `node` as (source, key) pairs.
    fn in_edges(&self, node: &Self::Node) -> Vec<(Self::Node, Self::Key)>;

    /// Outgoing edges of `node` as (destination, key) pairs.
    fn out_edges(&self, node: &Self::Node) -> Vec<(Self::Node, Self::Key)>;

    /// Keys of edges whose source and destination are both `node`.
    fn self_keys(&self, node: &Self::Node) -> Vec<Self::Key>;

    /// The graph restricted to `nodes` (duplicates collapse, first
    /// occurrence wins the ordering), keeping every edge of the original
    /// graph whose endpoints are both retained.
    fn induced_subgraph(&self, nodes: &[Self::Node]) -> Self;
}
