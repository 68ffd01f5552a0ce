//! Binding of pattern nodes to graph nodes.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use itertools::Itertools;

/// A partial assignment of pattern nodes to graph nodes.
///
/// Bindings keep the order in which they were made; the search only ever
/// extends at the end and retracts from the end, so the order is exactly the
/// pattern-node processing order. The assignment is deliberately not
/// injective: several pattern nodes may bind to the same graph node.
#[derive(Clone, Debug, Default)]
pub struct Mapping<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    bound: IndexMap<N, N>,
}

impl<N> Mapping<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    #[contracts::debug_ensures(ret.is_empty())]
    pub(crate) fn new() -> Self {
        Mapping {
            bound: IndexMap::new(),
        }
    }

    /// Binds `pattern` to `graph`. A pattern node is bound at most once per
    /// search branch.
    #[contracts::debug_requires(!self.bound.contains_key(&pattern))]
    #[contracts::debug_ensures(!self.bound.is_empty())]
    pub(crate) fn bind(&mut self, pattern: N, graph: N) {
        self.bound.insert(pattern, graph);
    }

    /// Retracts the most recent binding.
    pub(crate) fn unbind_last(&mut self) -> Option<(N, N)> {
        self.bound.pop()
    }

    /// The graph node `pattern` is bound to, if any.
    #[must_use]
    pub fn get(&self, pattern: &N) -> Option<&N> {
        self.bound.get(pattern)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Whether no pattern node is bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// (pattern node, graph node) pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &N)> {
        self.bound.iter()
    }

    /// The bound graph nodes in binding order, duplicates included.
    #[must_use]
    pub fn graph_nodes(&self) -> Vec<N> {
        self.bound.values().cloned().collect()
    }
}

impl<N> fmt::Display for Mapping<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.bound
                .iter()
                .map(|(p, g)| format!("{p:?} -> {g:?}"))
                .join(", ")
        )
    }
}
