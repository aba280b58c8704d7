use crate::{
    error::Result,
    graph::{Graph, Vertex, VertexId},
};

/// Start vertex of the bundled demo graph (`L`).
pub const DEMO_START: VertexId = VertexId(12);

/// The bundled 13-vertex demo graph, laid out on a 1100x650 canvas.
/// Every vertex has even degree.
pub fn demo_vertices() -> Vec<Vertex> {
    vec![
        Vertex::new(1, "A", 141.0, 69.0, [2, 5]),
        Vertex::new(2, "B", 1016.0, 162.0, [1, 11]),
        Vertex::new(3, "C", 228.0, 192.0, [4, 6]),
        Vertex::new(4, "D", 706.0, 245.0, [3, 10]),
        Vertex::new(5, "E", 111.0, 277.0, [1, 6]),
        Vertex::new(6, "F", 209.0, 291.0, [3, 5, 7, 8]),
        Vertex::new(7, "G", 432.0, 316.0, [6, 9]),
        Vertex::new(8, "H", 194.0, 400.0, [6, 9]),
        Vertex::new(9, "I", 417.0, 430.0, [7, 8, 10, 12]),
        Vertex::new(10, "J", 674.0, 469.0, [4, 9, 11, 13]),
        Vertex::new(11, "K", 880.0, 498.0, [2, 10]),
        Vertex::new(12, "L", 397.0, 554.0, [9, 13]),
        Vertex::new(13, "M", 652.0, 587.0, [10, 12]),
    ]
}

/// Build the bundled demo graph.
pub fn demo_graph() -> Result<Graph> { Graph::build(demo_vertices()) }
