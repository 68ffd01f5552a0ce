//! Lazy depth-first enumeration of subgraph matches.

use edgekey_graph::LabeledGraph;
use tracing::{debug, trace};

use crate::Match;
use crate::constraints::EdgeRequirements;
use crate::mapping::Mapping;

/// One search level: the pattern node it binds, its edge requirements, and a
/// cursor over the candidate graph nodes. The frame at depth `d` binds the
/// `d`-th pattern node in processing order.
struct Frame<G: LabeledGraph> {
    pattern_node: G::Node,
    requirements: EdgeRequirements<G>,
    /// Index of the next candidate in the graph-node snapshot.
    cursor: usize,
    /// Whether this frame currently holds the top binding of the mapping.
    bound: bool,
}

/// Lazy iterator over every match of `pattern` within `graph`.
///
/// Each call to [`Iterator::next`] resumes the depth-first search where the
/// previous call left off and runs it until the next complete assignment is
/// found. Dropping the iterator abandons the search; re-creating it restarts
/// from scratch. The iteration order is fully determined by the node orders
/// of the graph and the pattern.
pub struct SubgraphMatches<'g, 'p, G: LabeledGraph> {
    graph: &'g G,
    pattern: &'p G,
    /// Pattern nodes in processing order, fixed at construction.
    pattern_order: Vec<G::Node>,
    /// Graph-node snapshot shared by every level, fixed at construction.
    candidates: Vec<G::Node>,
    mapping: Mapping<G::Node>,
    stack: Vec<Frame<G>>,
    started: bool,
}

impl<'g, 'p, G: LabeledGraph> SubgraphMatches<'g, 'p, G> {
    pub(crate) fn new(graph: &'g G, pattern: &'p G) -> Self {
        let pattern_order = pattern.nodes();
        // An empty pattern matches nothing: there is no node to anchor a
        // match to. The snapshot is skipped so the iterator is inert.
        let candidates = if pattern_order.is_empty() {
            Vec::new()
        } else {
            graph.nodes()
        };
        SubgraphMatches {
            graph,
            pattern,
            pattern_order,
            candidates,
            mapping: Mapping::new(),
            stack: Vec::new(),
            started: false,
        }
    }

    /// Pushes the frame for the next unbound pattern node, resolving its
    /// edge requirements against the current bindings.
    fn push_frame(&mut self) {
        let depth = self.stack.len();
        let node = self.pattern_order[depth].clone();
        trace!(depth, pattern_node = ?node, "descending");
        let requirements = EdgeRequirements::for_pattern_node(self.pattern, &node, &self.mapping);
        self.stack.push(Frame {
            pattern_node: node,
            requirements,
            cursor: 0,
            bound: false,
        });
    }

    /// Builds the yielded match once every pattern node is bound.
    fn emit(&self) -> Match<G> {
        let nodes = self.mapping.graph_nodes();
        let subgraph = self.graph.induced_subgraph(&nodes);
        debug!(mapping = %self.mapping, "match found");
        Match {
            subgraph,
            mapping: self.mapping.clone(),
        }
    }
}

impl<G: LabeledGraph> Iterator for SubgraphMatches<'_, '_, G> {
    type Item = Match<G>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pattern_order.is_empty() {
            return None;
        }
        if !self.started {
            self.started = true;
            self.push_frame();
        }
        while let Some(frame) = self.stack.last_mut() {
            // Retract the binding made on the previous visit to this frame
            // before trying its next candidate. Sibling candidates never see
            // each other's tentative bindings.
            if frame.bound {
                self.mapping.unbind_last();
                frame.bound = false;
            }

            let mut advanced = false;
            while frame.cursor < self.candidates.len() {
                let candidate = self.candidates[frame.cursor].clone();
                frame.cursor += 1;
                if frame.requirements.satisfied_by(self.graph, &candidate) {
                    self.mapping.bind(frame.pattern_node.clone(), candidate);
                    frame.bound = true;
                    advanced = true;
                    break;
                }
            }
            if !advanced {
                self.stack.pop();
                trace!(depth = self.stack.len(), "exhausted, backtracking");
                continue;
            }
            if self.stack.len() == self.pattern_order.len() {
                return Some(self.emit());
            }
            self.push_frame();
        }
        None
    }
}
