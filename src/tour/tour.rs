use ahash::AHashSet;
use serde::Serialize;

use crate::graph::{EdgeKey, Graph, VertexId};

/// A completed closed walk. The first and last vertex coincide.
///
/// Consumers that draw or animate the walk iterate [`Tour::legs`] with
/// their own pacing; the tour itself never changes once returned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tour(Vec<VertexId>);

impl From<Vec<VertexId>> for Tour {
    fn from(vertices: Vec<VertexId>) -> Self { Self(vertices) }
}

impl Tour {
    /// Vertex occurrences in walking order.
    #[inline] pub fn vertices(&self) -> &[VertexId] { &self.0 }

    /// Number of vertex occurrences (edge count + 1 for a full circuit).
    #[inline] pub fn len(&self) -> usize { self.0.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[inline] pub fn into_inner(self) -> Vec<VertexId> { self.0 }

    /// Returns true if the walk starts and ends at the same vertex.
    pub fn is_closed(&self) -> bool {
        !self.0.is_empty() && self.0.first() == self.0.last()
    }

    /// Consecutive vertex pairs, one per traversed edge.
    pub fn legs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Concatenated vertex labels, e.g. `"LIJML"`.
    pub fn labels(&self, graph: &Graph) -> String {
        self.0.iter().map(|&v| graph.label(v)).collect()
    }

    /// Total length of all legs, using the render geometry.
    pub fn distance(&self, graph: &Graph) -> f64 {
        self.legs()
            .filter_map(|(a, b)| graph.find_edge(EdgeKey::new(a, b)))
            .map(|e| graph.edge(e).distance())
            .sum()
    }

    /// Returns true if this is a closed walk using every edge of `graph`
    /// exactly once.
    pub fn covers(&self, graph: &Graph) -> bool {
        if !self.is_closed() || self.len() != graph.edge_count() + 1 { return false }

        let mut used = AHashSet::with_capacity(graph.edge_count());
        self.legs().all(|(a, b)| {
            graph.find_edge(EdgeKey::new(a, b)).is_some_and(|e| used.insert(e))
        })
    }
}
