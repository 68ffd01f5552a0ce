//! Directed, edge-labeled multigraphs for the edgekey workspace.
//!
//! This crate provides the concrete graph container ([`MultiGraph`]) and the
//! capability trait ([`LabeledGraph`]) that the subgraph matcher consumes.
//! Edges between the same ordered pair of nodes are distinguished by a key;
//! self-edges are permitted and queryable on their own.

mod multigraph;
mod query;

pub use crate::multigraph::{GraphError, MultiGraph};
pub use crate::query::LabeledGraph;
