#![doc = "Eulerian circuit construction over small hand-authored planar graphs"]
mod demo;
mod error;
mod eulerian;
mod graph;
mod progress;
mod strategy;
mod tour;

#[doc(inline)]
pub use error::{Result, TourError};

#[doc(inline)]
pub use graph::{Edge, EdgeKey, Graph, GraphFile, Vertex, VertexId, VertexRecord};

#[doc(inline)]
pub use eulerian::{Classification, classify, odd_degree_count};

#[doc(inline)]
pub use tour::{Chooser, Hierholzer, Scripted, Subtour, Tour, Uniform, splice};

#[doc(inline)]
pub use strategy::{Outcome, Phase, Rejection, Strategy, TourConfig, calculate};

#[doc(inline)]
pub use progress::{Category, Message, Progress, Silent, TracingProgress};

#[doc(inline)]
pub use demo::{DEMO_START, demo_graph, demo_vertices};
