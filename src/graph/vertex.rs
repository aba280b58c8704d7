use std::fmt;

use geo::Point;
use serde::{Deserialize, Serialize};

/// Identity of a vertex, unique within one graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self { Self(id) }
}

/// A vertex as authored: identity, display label, canvas position and
/// neighbor list. Immutable once the graph is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    id: VertexId,
    name: String,
    position: Point<f64>,
    linked: Vec<VertexId>,
}

impl Vertex {
    pub fn new(id: u32, name: impl Into<String>, x: f64, y: f64, linked: impl IntoIterator<Item = u32>) -> Self {
        Self {
            id: VertexId(id),
            name: name.into(),
            position: Point::new(x, y),
            linked: linked.into_iter().map(VertexId).collect(),
        }
    }

    #[inline] pub fn id(&self) -> VertexId { self.id }

    #[inline] pub fn name(&self) -> &str { &self.name }

    /// Position on the drawing surface; only the renderer cares.
    #[inline] pub fn position(&self) -> Point<f64> { self.position }

    /// Neighbor identities in authored order.
    #[inline] pub fn linked(&self) -> &[VertexId] { &self.linked }

    /// Degree as authored, i.e. the length of the neighbor list.
    #[inline] pub fn degree(&self) -> usize { self.linked.len() }
}
