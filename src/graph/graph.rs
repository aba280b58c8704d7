use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{
    error::{Result, TourError},
    graph::{Edge, EdgeKey, Vertex, VertexId},
};

/// A static undirected graph with deduplicated edges and a per-vertex
/// incidence index.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: AHashMap<VertexId, usize>,     // vertex identity -> position in `vertices`
    edges: Vec<Edge>,                     // in order of first mention
    edge_index: AHashMap<EdgeKey, usize>, // edge key -> position in `edges`
    incidence: Vec<SmallVec<[usize; 4]>>, // incidence[v] = edges touching vertices[v]
}

impl Graph {
    /// Build a graph from authored vertices.
    ///
    /// Every (vertex, neighbor) mention is normalized to an [`EdgeKey`] and
    /// registered once, so an edge listed from both endpoints yields a single
    /// record. Fails if an identity repeats or a neighbor is unknown.
    pub fn build(vertices: Vec<Vertex>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(vertices.len());
        for (i, vertex) in vertices.iter().enumerate() {
            if index.insert(vertex.id(), i).is_some() {
                return Err(TourError::DuplicateVertex(vertex.id()));
            }
        }

        let mut edges = Vec::new();
        let mut edge_index = AHashMap::new();
        let mut incidence = vec![SmallVec::new(); vertices.len()];

        for (u, vertex) in vertices.iter().enumerate() {
            for &neighbor in vertex.linked() {
                let &v = index.get(&neighbor).ok_or(TourError::GraphMalformed { vertex: vertex.id(), neighbor })?;

                if !vertices[v].linked().contains(&vertex.id()) {
                    tracing::warn!(vertex = %vertex.id(), %neighbor, "link is only listed from one side");
                }

                let key = EdgeKey::new(vertex.id(), neighbor);
                if edge_index.contains_key(&key) { continue }

                let e = edges.len();
                edges.push(Edge::between(vertex, &vertices[v]));
                edge_index.insert(key, e);
                incidence[u].push(e);
                if v != u { incidence[v].push(e) }
            }
        }

        tracing::debug!(vertices = vertices.len(), edges = edges.len(), "graph built");

        Ok(Self { vertices, index, edges, edge_index, incidence })
    }

    /// Get the number of vertices in the graph.
    #[inline] pub fn vertex_count(&self) -> usize { self.vertices.len() }

    /// Get the number of distinct undirected edges in the graph.
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() }

    /// All vertices in authored order.
    #[inline] pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    /// All edges in order of first mention.
    #[inline] pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Get the edge at a given position.
    #[inline] pub fn edge(&self, edge: usize) -> &Edge { &self.edges[edge] }

    /// Look up a vertex by identity.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.index.get(&id).map(|&i| &self.vertices[i])
    }

    /// Returns true if a vertex with this identity exists.
    #[inline] pub fn contains(&self, id: VertexId) -> bool { self.index.contains_key(&id) }

    /// Look up the position of an edge by key.
    #[inline]
    pub fn find_edge(&self, key: EdgeKey) -> Option<usize> {
        self.edge_index.get(&key).copied()
    }

    /// Edges incident to a vertex (empty for unknown identities).
    #[inline]
    pub fn incident_edges(&self, id: VertexId) -> &[usize] {
        self.index.get(&id).map_or(&[][..], |&i| self.incidence[i].as_slice())
    }

    /// The endpoint of `edge` opposite `id`.
    #[inline]
    pub fn other_end(&self, edge: usize, id: VertexId) -> VertexId {
        self.edges[edge].other_end(id)
    }

    /// Display label of a vertex, or its identity if unknown.
    pub fn label(&self, id: VertexId) -> String {
        self.vertex(id).map_or_else(|| id.to_string(), |v| v.name().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_graph() -> Graph {
        Graph::build(vec![
            Vertex::new(1, "A", 0.0, 0.0, [2, 3]),
            Vertex::new(2, "B", 4.0, 0.0, [1, 3]),
            Vertex::new(3, "C", 4.0, 3.0, [1, 2, 4]),
            Vertex::new(4, "D", 8.0, 3.0, [3]),
        ]).unwrap()
    }

    #[test]
    fn build_deduplicates_edges() {
        let graph = make_test_graph();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);

        let keys = graph.edges().iter().map(|e| e.key().to_string()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["1_2", "1_3", "2_3", "3_4"]);
    }

    #[test]
    fn listing_order_does_not_change_edge_set() {
        let reversed = Graph::build(vec![
            Vertex::new(4, "D", 8.0, 3.0, [3]),
            Vertex::new(3, "C", 4.0, 3.0, [4, 2, 1]),
            Vertex::new(2, "B", 4.0, 0.0, [3, 1]),
            Vertex::new(1, "A", 0.0, 0.0, [3, 2]),
        ]).unwrap();
        let graph = make_test_graph();

        let mut a = graph.edges().iter().map(Edge::key).collect::<Vec<_>>();
        let mut b = reversed.edges().iter().map(Edge::key).collect::<Vec<_>>();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn incidence_matches_endpoints() {
        let graph = make_test_graph();

        for vertex in graph.vertices() {
            let incident = graph.incident_edges(vertex.id());
            assert_eq!(incident.len(), vertex.degree());
            assert!(incident.iter().all(|&e| graph.edge(e).touches(vertex.id())));
        }

        let expected = graph.edges().iter().enumerate()
            .filter(|(_, e)| e.touches(VertexId(3)))
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        assert_eq!(graph.incident_edges(VertexId(3)), expected.as_slice());
    }

    #[test]
    fn unknown_vertex_has_no_incident_edges() {
        let graph = make_test_graph();
        assert!(graph.incident_edges(VertexId(99)).is_empty());
        assert!(graph.vertex(VertexId(99)).is_none());
        assert_eq!(graph.label(VertexId(99)), "99");
    }

    #[test]
    fn other_end_and_lookup() {
        let graph = make_test_graph();
        let e = graph.find_edge(EdgeKey::new(VertexId(4), VertexId(3))).unwrap();

        assert_eq!(graph.other_end(e, VertexId(3)), VertexId(4));
        assert_eq!(graph.other_end(e, VertexId(4)), VertexId(3));
        assert_eq!(graph.label(VertexId(4)), "D");
    }

    #[test]
    fn unresolved_neighbor_is_malformed() {
        let result = Graph::build(vec![
            Vertex::new(1, "A", 0.0, 0.0, [2]),
            Vertex::new(2, "B", 1.0, 0.0, [1, 7]),
        ]);

        match result {
            Err(TourError::GraphMalformed { vertex, neighbor }) => {
                assert_eq!(vertex, VertexId(2));
                assert_eq!(neighbor, VertexId(7));
            }
            other => panic!("expected GraphMalformed, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_identity_is_rejected() {
        let result = Graph::build(vec![
            Vertex::new(1, "A", 0.0, 0.0, [2]),
            Vertex::new(1, "B", 1.0, 0.0, [1]),
        ]);
        assert!(matches!(result, Err(TourError::DuplicateVertex(VertexId(1)))));
    }

    #[test]
    fn one_sided_link_still_registers_edge() {
        let graph = Graph::build(vec![
            Vertex::new(1, "A", 0.0, 0.0, [2]),
            Vertex::new(2, "B", 1.0, 0.0, [0u32; 0]),
        ]).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.incident_edges(VertexId(2)).len(), 1);
    }

    #[test]
    fn self_loop_is_incident_once() {
        let graph = Graph::build(vec![Vertex::new(1, "A", 0.0, 0.0, [1, 1])]).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.incident_edges(VertexId(1)), &[0]);
        assert_eq!(graph.other_end(0, VertexId(1)), VertexId(1));
    }

    #[test]
    fn empty_graph_is_valid() {
        let graph = Graph::build(vec![]).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
