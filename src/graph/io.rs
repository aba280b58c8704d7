use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    graph::{Graph, Vertex, VertexId},
};

/// One vertex as written in a graph file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub id: u32,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub linked: Vec<u32>,
}

impl From<VertexRecord> for Vertex {
    fn from(record: VertexRecord) -> Self {
        Vertex::new(record.id, record.name, record.x, record.y, record.linked)
    }
}

impl From<&Vertex> for VertexRecord {
    fn from(vertex: &Vertex) -> Self {
        Self {
            id: vertex.id().0,
            name: vertex.name().to_string(),
            x: vertex.position().x(),
            y: vertex.position().y(),
            linked: vertex.linked().iter().map(|v| v.0).collect(),
        }
    }
}

/// A graph description on disk: either a bare array of vertex records or
/// an object carrying the records and an optional start vertex.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<VertexId>,
    pub nodes: Vec<VertexRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GraphFileRepr {
    Nodes(Vec<VertexRecord>),
    Full { #[serde(default)] start: Option<VertexId>, nodes: Vec<VertexRecord> },
}

impl GraphFile {
    /// Parse a graph description from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(match serde_json::from_str::<GraphFileRepr>(text)? {
            GraphFileRepr::Nodes(nodes) => Self { start: None, nodes },
            GraphFileRepr::Full { start, nodes } => Self { start, nodes },
        })
    }

    /// Read a graph description from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Describe an existing graph.
    pub fn from_graph(graph: &Graph, start: Option<VertexId>) -> Self {
        Self { start, nodes: graph.vertices().iter().map(VertexRecord::from).collect() }
    }

    /// Build the graph described by this file.
    pub fn into_graph(self) -> Result<Graph> {
        Graph::build(self.nodes.into_iter().map(Vertex::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TourError;

    const SQUARE: &str = r#"[
        { "id": 1, "name": "A", "x": 0, "y": 0, "linked": [2, 4] },
        { "id": 2, "name": "B", "x": 1, "y": 0, "linked": [1, 3] },
        { "id": 3, "name": "C", "x": 1, "y": 1, "linked": [2, 4] },
        { "id": 4, "name": "D", "x": 0, "y": 1, "linked": [3, 1] }
    ]"#;

    #[test]
    fn parses_bare_array() {
        let file = GraphFile::from_json(SQUARE).unwrap();
        assert_eq!(file.start, None);
        assert_eq!(file.nodes.len(), 4);

        let graph = file.into_graph().unwrap();
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn parses_object_with_start() {
        let text = format!(r#"{{ "start": 3, "nodes": {SQUARE} }}"#);
        let file = GraphFile::from_json(&text).unwrap();
        assert_eq!(file.start, Some(VertexId(3)));
        assert_eq!(file.nodes[2].name, "C");
    }

    #[test]
    fn roundtrip_through_graph() {
        let graph = GraphFile::from_json(SQUARE).unwrap().into_graph().unwrap();
        let json = GraphFile::from_graph(&graph, Some(VertexId(1))).to_json().unwrap();

        let again = GraphFile::from_json(&json).unwrap();
        assert_eq!(again.start, Some(VertexId(1)));
        assert_eq!(again.nodes[3].linked, vec![3, 1]);
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(GraphFile::from_json("{ nodes: "), Err(TourError::Json(_))));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.json");
        std::fs::write(&path, SQUARE).unwrap();

        let file = GraphFile::read(&path).unwrap();
        assert_eq!(file.nodes.len(), 4);

        let missing = GraphFile::read(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(TourError::Io(_))));
    }
}
