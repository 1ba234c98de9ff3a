//! The directed graph built from an edge-list file.

use std::collections::{BTreeMap, BTreeSet};

/// A directed graph over string vertex labels.
///
/// Adjacency is kept in ordered maps so that vertex iteration order is total
/// and stable across runs; the seeded layout and the per-vertex color table
/// both rely on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiGraph {
    adj: BTreeMap<String, BTreeSet<String>>,
}

impl DiGraph {
    pub fn new() -> Self {
        Self {
            adj: BTreeMap::new(),
        }
    }

    pub fn add_vertex(&mut self, v: &str) {
        if !self.adj.contains_key(v) {
            self.adj.insert(String::from(v), BTreeSet::new());
        }
    }

    /// Adds an arc from `src` to `dst`, inserting missing endpoints.
    ///
    /// Duplicate arcs are idempotent.
    pub fn add_arc(&mut self, src: &str, dst: &str) {
        self.add_vertex(dst);
        self.adj
            .entry(String::from(src))
            .or_insert_with(BTreeSet::new)
            .insert(String::from(dst));
    }

    pub fn contains_vertex(&self, v: &str) -> bool {
        self.adj.contains_key(v)
    }

    pub fn contains_arc(&self, src: &str, dst: &str) -> bool {
        self.adj.get(src).map_or(false, |ns| ns.contains(dst))
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.adj.values().map(|ns| ns.len()).sum()
    }

    /// Iterates over vertex labels in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adj.keys().map(String::as_str)
    }

    /// Iterates over arcs as `(src, dst)` pairs, grouped by source.
    pub fn arcs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.adj
            .iter()
            .flat_map(|(u, ns)| ns.iter().map(move |v| (u.as_str(), v.as_str())))
    }

    pub fn successors(&self, v: &str) -> impl Iterator<Item = &str> {
        self.adj
            .get(v)
            .into_iter()
            .flat_map(|ns| ns.iter().map(String::as_str))
    }

    /// Returns the subgraph induced by `vertices`: the given labels that
    /// exist in the graph, together with every arc between them.
    pub fn induced<'a, I>(&self, vertices: I) -> DiGraph
    where
        I: IntoIterator<Item = &'a str>,
    {
        let selected: BTreeSet<&str> = vertices
            .into_iter()
            .filter(|v| self.contains_vertex(v))
            .collect();
        let mut subgraph = DiGraph::new();
        for &v in &selected {
            subgraph.add_vertex(v);
            for n in self.successors(v) {
                if selected.contains(n) {
                    subgraph.add_arc(v, n);
                }
            }
        }
        subgraph
    }

    /// Merges the vertices and arcs of `other` into `self` (set union).
    pub fn union_with(&mut self, other: &DiGraph) {
        for (u, ns) in &other.adj {
            let entry = self
                .adj
                .entry(u.clone())
                .or_insert_with(BTreeSet::new);
            entry.extend(ns.iter().cloned());
        }
    }
}
