// Integration tests for the concrete scenarios:
//   4-cycle, bowtie, single segment, malformed adjacency

use eulertour::{
    Category, Classification, Graph, Hierholzer, Message, Outcome, Phase, Scripted, Silent, Strategy, TourConfig,
    TourError, Uniform, Vertex, VertexId, calculate, classify,
};

fn square() -> Graph {
    Graph::build(vec![
        Vertex::new(1, "A", 0.0, 0.0, [2, 4]),
        Vertex::new(2, "B", 1.0, 0.0, [1, 3]),
        Vertex::new(3, "C", 1.0, 1.0, [2, 4]),
        Vertex::new(4, "D", 0.0, 1.0, [3, 1]),
    ]).unwrap()
}

fn bowtie() -> Graph {
    Graph::build(vec![
        Vertex::new(1, "A", 0.0, 0.0, [2, 3]),
        Vertex::new(2, "B", 0.0, 2.0, [1, 3]),
        Vertex::new(3, "C", 1.0, 1.0, [1, 2, 4, 5]),
        Vertex::new(4, "D", 2.0, 0.0, [3, 5]),
        Vertex::new(5, "E", 2.0, 2.0, [3, 4]),
    ]).unwrap()
}

/// Sorted edge keys walked by a tour.
fn walked(tour: &eulertour::Tour) -> Vec<(u32, u32)> {
    let mut legs = tour.legs()
        .map(|(a, b)| if a < b { (a.0, b.0) } else { (b.0, a.0) })
        .collect::<Vec<_>>();
    legs.sort();
    legs
}

#[test]
fn square_circuit_uses_every_edge_once() {
    let graph = square();
    assert_eq!(classify(graph.vertices()), Classification { trail: true, cycle: true });

    for seed in 0..32 {
        let config = TourConfig::new(VertexId(1)).with_seed(Some(seed));
        let tour = calculate(&graph, &config, &mut Silent).unwrap().into_tour().unwrap();

        assert_eq!(tour.len(), 5);
        assert_eq!(tour.vertices().first(), Some(&VertexId(1)));
        assert_eq!(tour.vertices().last(), Some(&VertexId(1)));
        assert_eq!(walked(&tour), vec![(1, 2), (1, 4), (2, 3), (3, 4)]);
    }
}

#[test]
fn bowtie_passes_through_shared_vertex_twice() {
    let graph = bowtie();
    assert!(classify(graph.vertices()).cycle);

    for seed in 0..64 {
        let config = TourConfig::new(VertexId(1)).with_seed(Some(seed));
        let tour = calculate(&graph, &config, &mut Silent).unwrap().into_tour().unwrap();

        assert_eq!(tour.len(), 7);
        assert!(tour.covers(&graph));
        assert_eq!(tour.vertices().iter().filter(|&&v| v == VertexId(3)).count(), 2);
    }
}

#[test]
fn bowtie_from_outer_vertex_splices_in_the_middle() {
    let graph = bowtie();
    let mut messages: Vec<Message> = Vec::new();

    // D -> C, then C -> E closes DCED early; CABC is found on the second pass.
    let mut engine = Hierholzer::new(&graph, VertexId(4), Scripted::new([0, 2])).unwrap();
    let tour = engine.run(&mut messages).unwrap();

    let established = messages.iter()
        .filter(|m| m.category == Category::Subtour && m.text.starts_with("Established"))
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(established, vec!["Established DCED", "Established CABC"]);
    assert_eq!(tour.labels(&graph), "DCABCED");
    assert!(tour.covers(&graph));
}

#[test]
fn bowtie_from_shared_vertex_splices_at_the_front() {
    let graph = bowtie();
    let mut engine = Hierholzer::new(&graph, VertexId(3), Scripted::first()).unwrap();
    let tour = engine.run(&mut Silent).unwrap();

    assert_eq!(tour.labels(&graph), "CDECABC");
    assert!(tour.covers(&graph));
}

#[test]
fn segment_is_trail_only_and_never_constructed() {
    let graph = Graph::build(vec![
        Vertex::new(1, "A", 0.0, 0.0, [2]),
        Vertex::new(2, "B", 1.0, 0.0, [1]),
    ]).unwrap();
    assert_eq!(classify(graph.vertices()), Classification { trail: true, cycle: false });

    let mut strategy = Strategy::new(&graph, VertexId(1));
    let outcome = strategy.run(Scripted::first(), &mut Silent).unwrap();

    assert_eq!(strategy.phase(), Phase::Rejected);
    assert!(matches!(outcome, Outcome::NoCircuit(_)));
    assert!(outcome.tour().is_none());
}

#[test]
fn unresolved_neighbor_fails_construction() {
    let result = Graph::build(vec![
        Vertex::new(1, "A", 0.0, 0.0, [2, 3]),
        Vertex::new(2, "B", 1.0, 0.0, [1, 3]),
    ]);

    assert!(matches!(
        result,
        Err(TourError::GraphMalformed { vertex: VertexId(1), neighbor: VertexId(3) })
    ));
}

#[test]
fn every_edge_visited_after_run() {
    let graph = bowtie();
    let mut engine = Hierholzer::new(&graph, VertexId(5), Uniform::seeded(11)).unwrap();
    assert!(engine.visited().iter().all(|&v| !v));

    let tour = engine.run(&mut Silent).unwrap();
    assert_eq!(engine.visited().len(), graph.edge_count());
    assert!(engine.visited().iter().all(|&v| v));
    assert!(engine.unvisited(None).is_empty());
    assert_eq!(tour.vertices(), engine.tour());
}
