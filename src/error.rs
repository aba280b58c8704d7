use crate::graph::VertexId;

/// Convenience alias used throughout the crate.
pub type Result<T, E = TourError> = std::result::Result<T, E>;

/// Everything that can go wrong while loading a graph or constructing a tour.
///
/// `NoEulerianCircuit` is an expected outcome for odd-degree graphs; every
/// other variant aborts the current run.
#[derive(Debug, thiserror::Error)]
pub enum TourError {
    /// A neighbor identity does not resolve to a known vertex.
    #[error("graph malformed: vertex {vertex} links to unknown vertex {neighbor}")]
    GraphMalformed { vertex: VertexId, neighbor: VertexId },

    /// Two vertex records share one identity.
    #[error("graph malformed: vertex {0} is defined more than once")]
    DuplicateVertex(VertexId),

    /// A configured vertex identity is not part of the graph.
    #[error("unknown vertex {0}")]
    UnknownVertex(VertexId),

    /// The configured start vertex has no incident edge to walk.
    #[error("start vertex {0} has no incident edges")]
    IsolatedStart(VertexId),

    /// Classification found odd-degree vertices.
    #[error("graph has no eulerian circuit ({odd} vertices of odd degree)")]
    NoEulerianCircuit { odd: usize },

    /// A sub-tour failed to close on its origin.
    #[error("sub-tour from {origin} did not close: stuck at {at} after {steps} steps")]
    ConstructionDivergence { origin: VertexId, at: VertexId, steps: usize },

    /// The sub-tour origin is missing from the main tour at splice time.
    #[error("sub-tour origin {0} is not on the main tour")]
    SpliceIndexNotFound(VertexId),

    /// Unvisited edges remain, but none touch a vertex on the tour.
    #[error("{remaining} edges are unreachable from the tour (graph is disconnected)")]
    UnreachableEdges { remaining: usize },

    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse graph file: {0}")]
    Json(#[from] serde_json::Error),
}
