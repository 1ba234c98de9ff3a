//! Induced-subgraph union and per-component coloring.

use crate::{graph::DiGraph, types::Color};
use log::info;
use rand::Rng;
use std::collections::BTreeMap;

/// One record of the SCC partition file: an ordered list of vertex labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    vertices: Vec<String>,
}

impl Component {
    pub fn new(vertices: Vec<String>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Builds the union of every component's induced subgraph together with a
/// color table keyed by vertex label.
///
/// Each component draws one color from `rng` and assigns it to all of its
/// members; different components draw independently. Labels absent from
/// `graph` contribute neither vertices nor colors.
pub fn color_components<R: Rng>(
    graph: &DiGraph,
    components: &[Component],
    rng: &mut R,
) -> (DiGraph, BTreeMap<String, Color>) {
    let mut combined = DiGraph::new();
    let mut colors = BTreeMap::new();
    for component in components {
        let subgraph = graph.induced(component.vertices().iter().map(String::as_str));
        let color: Color = rng.gen();
        for v in subgraph.vertices() {
            colors.insert(String::from(v), color);
        }
        combined.union_with(&subgraph);
    }
    info!(
        "combined {} components into {} vertices and {} arcs",
        components.len(),
        combined.num_vertices(),
        combined.num_arcs()
    );
    (combined, colors)
}
