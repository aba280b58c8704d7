use std::fmt;

use geo::{Euclidean, Point, line_measures::Distance};

use crate::graph::{Vertex, VertexId};

/// Normalized identity of an undirected edge: `low` always holds the
/// smaller vertex identity, so both directed mentions map to one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub low: VertexId,
    pub high: VertexId,
}

impl EdgeKey {
    /// Build the key for the edge joining `a` and `b`, in either order.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a > b { Self { low: b, high: a } } else { Self { low: a, high: b } }
    }
}

impl fmt::Display for EdgeKey {
    /// Format as `<low>_<high>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.low, self.high)
    }
}

/// An undirected edge with its render-only geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    key: EdgeKey,
    distance: f64,
    midpoint: Point<f64>,
}

impl Edge {
    /// Construct the edge between two vertices, deriving length and midpoint.
    pub(crate) fn between(a: &Vertex, b: &Vertex) -> Self {
        Self {
            key: EdgeKey::new(a.id(), b.id()),
            distance: Euclidean.distance(&a.position(), &b.position()),
            midpoint: (a.position() + b.position()) / 2.0,
        }
    }

    #[inline] pub fn key(&self) -> EdgeKey { self.key }

    #[inline] pub fn low(&self) -> VertexId { self.key.low }

    #[inline] pub fn high(&self) -> VertexId { self.key.high }

    #[inline] pub fn distance(&self) -> f64 { self.distance }

    #[inline] pub fn midpoint(&self) -> Point<f64> { self.midpoint }

    /// Returns true if `vertex` is one of the endpoints.
    #[inline]
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.key.low == vertex || self.key.high == vertex
    }

    /// The endpoint opposite `vertex`. For a self-loop both ends coincide.
    #[inline]
    pub fn other_end(&self, vertex: VertexId) -> VertexId {
        debug_assert!(self.touches(vertex), "vertex {vertex} is not an endpoint of {}", self.key);
        if self.key.low == vertex { self.key.high } else { self.key.low }
    }
}
