mod edge;
mod graph;
mod io;
mod vertex;

pub use edge::{Edge, EdgeKey};
pub use graph::Graph;
pub use io::{GraphFile, VertexRecord};
pub use vertex::{Vertex, VertexId};
